use crate::domain::ports::Clock;
use crate::utils::error::{PrimeAgeError, Result};
use crate::utils::validation::validate_non_negative_age;

/// Age this calendar year. Born in the future is a [`PrimeAgeError::NegativeAge`].
pub fn age_from(birth_year: i64, clock: &impl Clock) -> Result<i64> {
    let current_year = clock.current_year();
    let age = current_year
        .checked_sub(birth_year)
        .ok_or(PrimeAgeError::YearOutOfRange { birth_year })?;
    validate_non_negative_age(birth_year, current_year, age)
}
