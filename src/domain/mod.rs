// Domain layer: numeric rules and ports. Nothing here touches stdin, stdout or the clock directly.

pub mod age;
pub mod model;
pub mod ports;
pub mod primes;
