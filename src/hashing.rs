//! String hash functions accepted by the maps.
//!
//! A hash function maps a key to a non-negative integer. The maps reduce the
//! result modulo their capacity themselves, so these functions never need to
//! know the table size.

/// Signature every map accepts as its hash function.
pub type HashFn = fn(&str) -> usize;

/// Sums the code points of `key`.
///
/// Anagrams collide, which makes this a handy function for exercising
/// collision handling.
#[must_use]
pub fn additive_hash(key: &str) -> usize {
    key.chars().fold(0_usize, |hash, c| hash.wrapping_add(c as usize))
}

/// Sums the code points of `key`, each weighted by its one-based position.
#[must_use]
pub fn positional_hash(key: &str) -> usize {
    key.chars()
        .zip(1_usize..)
        .fold(0_usize, |hash, (c, position)| hash.wrapping_add(position.wrapping_mul(c as usize)))
}
