pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OnceArgs};

pub use adapters::clock::{FixedClock, SystemClock};
pub use core::{
    engine::PrimeAgeEngine,
    session::{run_interactive, run_once},
};
pub use domain::primes::{is_prime, next_prime, NO_PRIME};
pub use utils::error::{PrimeAgeError, Result};
