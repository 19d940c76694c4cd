use crate::utils::error::{PrimeAgeError, Result};

pub fn validate_single_argument(args: &[String]) -> Result<&str> {
    match args {
        [only] => Ok(only.as_str()),
        _ => Err(PrimeAgeError::ArgumentCount { count: args.len() }),
    }
}

pub fn validate_non_negative_age(birth_year: i64, current_year: i64, age: i64) -> Result<i64> {
    if age < 0 {
        return Err(PrimeAgeError::NegativeAge {
            birth_year,
            current_year,
        });
    }
    Ok(age)
}

/// Base-10 parse; surrounding whitespace is not tolerated.
pub fn parse_year(input: &str) -> Result<i64> {
    input.parse::<i64>().map_err(|source| PrimeAgeError::Parse {
        input: input.to_string(),
        source,
    })
}
