use std::{fmt, iter::FusedIterator, mem, slice};

use log::{debug, trace};

use crate::{
    chain::{self, Chain},
    error::CapacityError,
    hashing::{HashFn, additive_hash},
    map::StringMap,
    prime,
};

/// Capacity used by [`ChainingMap::default`].
pub const DEFAULT_CAPACITY: usize = 11;

/// Load factor at which `put` grows the table before inserting.
pub const MAX_LOAD_FACTOR: f64 = 1.0;

/// A string-keyed hash map resolving collisions by separate chaining.
///
/// Each slot holds a [`Chain`] of the entries hashing to it, kept in insertion
/// order. `put` keeps the load factor at or below [`MAX_LOAD_FACTOR`] by
/// doubling the capacity (rounded up to a prime) before inserting into a
/// table holding as many entries as it has buckets.
///
/// Shares the capacity-2 anomaly of
/// [`QuadraticProbingMap`](crate::QuadraticProbingMap).
#[derive(Debug, Clone)]
pub struct ChainingMap<V> {
    /// One chain per slot; the length is the capacity
    buckets: Vec<Chain<V>>,
    /// Total number of nodes across all chains
    size: usize,
    /// Maps keys to buckets before reduction modulo capacity
    hash: HashFn,
}

impl<V> Default for ChainingMap<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, additive_hash)
    }
}

impl<V> ChainingMap<V> {
    /// Creates an empty map with `capacity` rounded up to the next prime.
    #[must_use]
    pub fn new(capacity: usize, hash: HashFn) -> Self {
        let capacity = prime::next_prime(capacity);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Chain::new);

        Self { buckets, size: 0, hash }
    }

    /// Index of the bucket `key` belongs to
    #[allow(clippy::arithmetic_side_effects)]
    fn bucket_index(&self, key: &str) -> usize {
        (self.hash)(key) % self.buckets.len()
    }

    /// The bucket `key` belongs to
    fn bucket(&self, key: &str) -> Option<&Chain<V>> {
        self.buckets.get(self.bucket_index(key))
    }

    /// Inserts a key-value pair, overwriting the value of an existing key.
    ///
    /// Returns the previous value when the key was already present.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        if self.load_factor() >= MAX_LOAD_FACTOR {
            debug!(
                "load factor {:.2} reached {MAX_LOAD_FACTOR} at capacity {}, growing",
                self.load_factor(),
                self.capacity()
            );
            self.resize(self.capacity().saturating_mul(2));
        }

        let key = key.into();
        let index = self.bucket_index(&key);
        let bucket = self.buckets.get_mut(index)?;

        if let Some(slot) = bucket.get_mut(&key) {
            return Some(mem::replace(slot, value));
        }

        bucket.push_back(key, value);
        self.size = self.size.saturating_add(1);
        None
    }

    /// Retrieve a value for a given key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.bucket(key)?.get(key)
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets.get_mut(index)?.get_mut(key)
    }

    /// Returns true if the key's bucket holds it
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.bucket(key).is_some_and(|bucket| bucket.contains(key))
    }

    /// Unlinks `key` from its bucket, returning its value
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let value = self.buckets.get_mut(index)?.remove(key)?;
        self.size = self.size.saturating_sub(1);
        Some(value)
    }

    /// Rebuilds the table at `new_capacity`, rounded up to a prime.
    ///
    /// Every entry is replayed through [`put`](Self::put) into a fresh table.
    /// Returns the final capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::Zero`] and leaves the table untouched if
    /// `new_capacity` is 0.
    pub fn try_resize(&mut self, new_capacity: usize) -> Result<usize, CapacityError> {
        if new_capacity < 1 {
            return Err(CapacityError::Zero);
        }

        let capacity =
            if prime::is_prime(new_capacity) { new_capacity } else { prime::next_prime(new_capacity) };

        let mut table = Self::new(capacity, self.hash);
        if capacity == 2 {
            // `new` bumps 2 to 3; drop the extra bucket to land on exactly 2.
            table.buckets.truncate(2);
        }

        let old_capacity = self.capacity();
        for bucket in mem::take(&mut self.buckets) {
            for (key, value) in bucket {
                table.put(key, value);
            }
        }
        *self = table;

        debug!("resized from {old_capacity} to {} buckets holding {} entries", self.capacity(), self.size);
        Ok(self.capacity())
    }

    /// Rebuilds the table at `new_capacity`, silently ignoring a zero target.
    pub fn resize(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_resize(new_capacity) {
            debug!("resize ignored: {err}");
        }
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor of the map
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Number of buckets with no nodes
    #[must_use]
    pub fn empty_slot_count(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.is_empty()).count()
    }

    /// Returns an iterator over the entries, bucket by bucket
    #[must_use]
    pub fn entries(&self) -> Entries<'_, V> {
        Entries { buckets: self.buckets.iter(), chain: None }
    }

    /// Empties every bucket, keeping the capacity
    pub fn clear(&mut self) {
        trace!("clearing {} entries from {} buckets", self.size, self.capacity());
        for bucket in &mut self.buckets {
            *bucket = Chain::new();
        }
        self.size = 0;
    }
}

impl<V> StringMap<V> for ChainingMap<V> {
    type Entries<'a>
        = Entries<'a, V>
    where
        Self: 'a;

    fn put(&mut self, key: String, value: V) -> Option<V> {
        Self::put(self, key, value)
    }

    fn get(&self, key: &str) -> Option<&V> {
        Self::get(self, key)
    }

    fn contains_key(&self, key: &str) -> bool {
        Self::contains_key(self, key)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        Self::remove(self, key)
    }

    fn resize(&mut self, new_capacity: usize) {
        Self::resize(self, new_capacity);
    }

    fn entries(&self) -> Self::Entries<'_> {
        Self::entries(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn len(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        Self::capacity(self)
    }

    fn empty_slot_count(&self) -> usize {
        Self::empty_slot_count(self)
    }
}

impl<K, V> Extend<(K, V)> for ChainingMap<V>
where
    K: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ChainingMap<V>
where
    K: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

/// One line per bucket: `i: [(key: value) -> (key: value)]`.
impl<V: fmt::Display> fmt::Display for ChainingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            writeln!(f, "{index}: {bucket}")?;
        }
        Ok(())
    }
}

/// Iterator over the entries of a [`ChainingMap`]
#[derive(Debug, Clone)]
pub struct Entries<'a, V> {
    /// Buckets not yet visited
    buckets: slice::Iter<'a, Chain<V>>,
    /// Nodes left in the current bucket
    chain: Option<chain::Iter<'a, V>>,
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(|chain| chain.next()) {
                return Some(entry);
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }
}

impl<V> FusedIterator for Entries<'_, V> {}

impl<'a, V> IntoIterator for &'a ChainingMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Entries<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
