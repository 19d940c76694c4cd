use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimeAgeError {
    #[error("You cannot have a negative age.")]
    NegativeAge { birth_year: i64, current_year: i64 },

    #[error("Exactly one command-line parameter required.")]
    ArgumentCount { count: usize },

    #[error("Could not parse '{input}' to an integer.")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Birth year {birth_year} is out of range")]
    YearOutOfRange { birth_year: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrimeAgeError {
    /// Process exit status for a fatal error. Usage mistakes share clap's code.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrimeAgeError::ArgumentCount { .. } | PrimeAgeError::Parse { .. } => 2,
            PrimeAgeError::NegativeAge { .. }
            | PrimeAgeError::YearOutOfRange { .. }
            | PrimeAgeError::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PrimeAgeError>;
