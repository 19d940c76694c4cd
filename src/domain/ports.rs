/// Source of the current calendar year.
pub trait Clock {
    fn current_year(&self) -> i64;
}
