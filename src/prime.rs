//! Prime helpers used to size tables.
//!
//! Every table keeps a prime number of slots so that quadratic probing visits
//! enough distinct slots to always find room while the load factor is at most
//! one half.

/// Returns the smallest prime reachable from `n` by the odd-only scan.
///
/// An even `n` is bumped to the next odd number before scanning, so
/// `next_prime(2)` is `3` rather than `2`. Values below 2 end up at `3` as
/// well, which means no table can be built with fewer than three slots.
///
/// The scan saturates at `usize::MAX` instead of wrapping around.
#[must_use]
pub fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { n.saturating_add(1) } else { n };

    while !is_prime(candidate) {
        if candidate == usize::MAX {
            break;
        }
        candidate = candidate.saturating_add(2);
    }

    candidate
}

/// Trial division by odd factors up to the square root of `n`.
#[must_use]
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }

    if n < 2 || n % 2 == 0 {
        return false;
    }

    let mut factor: usize = 3;
    while factor.checked_mul(factor).is_some_and(|square| square <= n) {
        if n % factor == 0 {
            return false;
        }
        factor = factor.saturating_add(2);
    }

    true
}
