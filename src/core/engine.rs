use crate::core::{Answer, Clock};
use crate::domain::age::age_from;
use crate::domain::primes::next_prime;
use crate::utils::error::{PrimeAgeError, Result};

/// Birth year in, year of the next prime age out.
pub struct PrimeAgeEngine<C: Clock> {
    clock: C,
}

impl<C: Clock> PrimeAgeEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn answer(&self, birth_year: i64) -> Result<Answer> {
        let age = age_from(birth_year, &self.clock)?;
        let next_prime = next_prime(age);
        let year = birth_year
            .checked_add(next_prime)
            .ok_or(PrimeAgeError::YearOutOfRange { birth_year })?;

        tracing::debug!(birth_year, age, next_prime, year, "answered");

        Ok(Answer {
            birth_year,
            age,
            next_prime,
            year,
        })
    }
}
