pub mod console;
pub mod engine;
pub mod session;

pub use crate::domain::model::{Answer, Request};
pub use crate::domain::ports::Clock;
pub use crate::utils::error::Result;
