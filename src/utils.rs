//! Utility traits for [`StringMap`] implementations

use crate::StringMap;

/// Extension trait for map implementations that provides additional utility methods
pub trait MapExtensions<V> {
    /// Returns the keys of the map as a Vec, in iteration order
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the map as a Vec, in iteration order
    fn values(&self) -> Vec<V>;

    /// Returns owned key-value pairs, in iteration order
    fn keys_and_values(&self) -> Vec<(String, V)>;
}

impl<V, M> MapExtensions<V> for M
where
    M: StringMap<V>,
    V: Clone,
{
    fn keys(&self) -> Vec<String> {
        self.entries().map(|(k, _)| k.to_owned()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.entries().map(|(_, v)| v.clone()).collect()
    }

    fn keys_and_values(&self) -> Vec<(String, V)> {
        self.entries().map(|(k, v)| (k.to_owned(), v.clone())).collect()
    }
}
