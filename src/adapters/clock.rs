use crate::domain::ports::Clock;
use chrono::{Datelike, Local};

/// Local wall-clock year.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i64 {
        i64::from(Local::now().year())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    year: i64,
}

impl FixedClock {
    pub fn new(year: i64) -> Self {
        Self { year }
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> i64 {
        self.year
    }
}
