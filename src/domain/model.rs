/// One classified line from the interactive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Year(i64),
    Quit,
}

/// Everything computed for one birth year. Only `year` is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub birth_year: i64,
    pub age: i64,
    pub next_prime: i64,
    pub year: i64,
}
