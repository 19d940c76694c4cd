//! Trial-division primality and the Bertrand-bounded next-prime search.

/// Returned by [`next_prime`] when no prime lies in `(n, 2n + 2)`.
/// Unreachable for non-negative input, but the search still checks for it.
pub const NO_PRIME: i64 = -1;

pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    // i <= n / i is i * i <= n without the overflow.
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// First prime in the half-open range `start..end`.
pub fn first_prime_in(start: i64, end: i64) -> Option<i64> {
    (start..end).find(|&candidate| is_prime(candidate))
}

/// Smallest prime strictly greater than `n`, or [`NO_PRIME`].
pub fn next_prime(n: i64) -> i64 {
    if n < 1 {
        return 2;
    }

    let next = n.saturating_add(1);
    // Bertrand: next < p < 2 * next
    match first_prime_in(next, next.saturating_mul(2)) {
        Some(prime) => prime,
        None => {
            tracing::warn!(n, "no prime below the Bertrand bound");
            NO_PRIME
        }
    }
}
