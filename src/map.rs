//! The operations shared by both collision-resolution strategies.

/// A string-keyed map with a prime-sized slot table.
///
/// [`QuadraticProbingMap`](crate::QuadraticProbingMap) and
/// [`ChainingMap`](crate::ChainingMap) both implement this trait, so client
/// code written against it works with either strategy.
pub trait StringMap<V> {
    /// Iterator over the live entries, in slot order.
    type Entries<'a>: Iterator<Item = (&'a str, &'a V)>
    where
        Self: 'a,
        V: 'a;

    /// Inserts or overwrites `key`, returning the previous value if any.
    fn put(&mut self, key: String, value: V) -> Option<V>;

    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<&V>;

    /// Returns true if a live entry for `key` exists.
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its value if it was present.
    fn remove(&mut self, key: &str) -> Option<V>;

    /// Rebuilds the table at `new_capacity` (rounded up to a prime).
    ///
    /// Targets the table cannot accept are ignored.
    fn resize(&mut self, new_capacity: usize);

    /// Returns the live entries.
    fn entries(&self) -> Self::Entries<'_>;

    /// Removes every entry, keeping the capacity.
    fn clear(&mut self);

    /// Number of live entries.
    fn len(&self) -> usize;

    /// Number of slots in the table.
    fn capacity(&self) -> usize;

    /// Number of slots (or buckets) holding nothing.
    fn empty_slot_count(&self) -> usize;

    /// Returns true if the map holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ratio of live entries to slots.
    #[allow(clippy::cast_precision_loss)]
    fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }
}
