use std::{fmt, iter::FusedIterator, mem, slice};

use log::{debug, trace, warn};

use crate::{
    error::{CapacityError, ProbeError},
    hashing::HashFn,
    map::StringMap,
    prime,
};

/// Load factor at which `put` grows the table before inserting.
pub const MAX_LOAD_FACTOR: f64 = 0.5;

/// A key-value pair stored in a slot
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

/// State of one position in the slot store
#[derive(Debug, Clone)]
enum Slot<V> {
    /// Never used since the table was built; ends every probe sequence
    Empty,
    /// Holds a live entry
    Occupied(Entry<V>),
    /// Held the given key until it was removed; probes continue past it
    Tombstone(String),
}

/// Where a probe for a key ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    /// A live entry with the key sits at this index
    Found(usize),
    /// The key is absent and may be placed at this index
    Vacant(usize),
}

/// Quadratic probe sequence `home + i²` modulo capacity, for `i` in
/// `0..capacity`.
#[derive(Debug, Clone)]
struct Probe {
    /// Home slot of the key
    home: usize,
    /// `i²` reduced modulo capacity
    offset: usize,
    /// Number of positions yielded so far
    step: usize,
    /// Table capacity
    capacity: usize,
}

impl Iterator for Probe {
    type Item = usize;

    #[allow(clippy::arithmetic_side_effects)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.capacity {
            return None;
        }

        let index = (self.home + self.offset) % self.capacity;
        // (i + 1)² - i² = 2i + 1
        self.offset = (self.offset + (2 * self.step + 1) % self.capacity) % self.capacity;
        self.step += 1;

        Some(index)
    }
}

/// A string-keyed hash map using open addressing with quadratic probing.
///
/// Removal leaves a tombstone in the slot so that probe sequences running
/// through it keep working. Tombstones are reused by later insertions and
/// dropped when the table is rebuilt.
///
/// The capacity is always prime. `put` keeps the load factor at or below
/// [`MAX_LOAD_FACTOR`] by doubling the capacity (rounded up to a prime) before
/// inserting into a table that is already half full.
///
/// Resizing to exactly 2 slots is a known anomaly: even capacities are bumped
/// to the next odd prime on construction, so the rebuilt table is created with
/// 3 slots and then truncated to 2. The behaviour is kept for compatibility and
/// is most likely unintentional.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct QuadraticProbingMap<V> {
    /// The slot store; its length is the capacity
    slots: Vec<Slot<V>>,
    /// Current number of live entries
    size: usize,
    /// Maps keys to home slots before reduction modulo capacity
    hash: HashFn,
}

impl<V> QuadraticProbingMap<V> {
    /// Creates an empty map with `capacity` rounded up to the next prime.
    #[must_use]
    pub fn new(capacity: usize, hash: HashFn) -> Self {
        let capacity = prime::next_prime(capacity);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || Slot::Empty);

        Self { slots, size: 0, hash }
    }

    /// Probe positions for `key`, starting at its home slot
    #[allow(clippy::arithmetic_side_effects)]
    fn probe(&self, key: &str) -> Probe {
        let capacity = self.capacity();
        Probe { home: (self.hash)(key) % capacity, offset: 0, step: 0, capacity }
    }

    /// Walks the probe sequence of `key`.
    ///
    /// An empty slot ends the walk. Tombstones are skipped, and the first one
    /// seen is where an absent key should be placed.
    fn locate(&self, key: &str) -> Result<Lookup, ProbeError> {
        let mut first_tombstone = None;

        for index in self.probe(key) {
            let Some(slot) = self.slots.get(index) else {
                continue;
            };
            match slot {
                Slot::Empty => return Ok(Lookup::Vacant(first_tombstone.unwrap_or(index))),
                Slot::Tombstone(_) => {
                    first_tombstone.get_or_insert(index);
                }
                Slot::Occupied(entry) if entry.key == key => return Ok(Lookup::Found(index)),
                Slot::Occupied(_) => {}
            }
        }

        first_tombstone.map(Lookup::Vacant).ok_or_else(|| ProbeError::Exhausted {
            key: key.to_owned(),
            capacity: self.capacity(),
        })
    }

    /// Index of the live entry for `key`, if any
    fn find(&self, key: &str) -> Option<usize> {
        match self.locate(key) {
            Ok(Lookup::Found(index)) => Some(index),
            Ok(Lookup::Vacant(_)) => None,
            Err(err) => {
                debug!("{err}; reporting key as absent");
                None
            }
        }
    }

    /// Inserts a key-value pair, overwriting the value of an existing key.
    ///
    /// Returns the previous value when the key was already present.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if self.needs_growth(&key) {
            debug!(
                "load factor {:.2} at capacity {} leaves no room for {key:?}, growing",
                self.load_factor(),
                self.capacity()
            );
            self.resize(self.capacity().saturating_mul(2));
        }

        self.place(key, value)
    }

    /// True if the table is already half full, or if inserting `key` as a new
    /// entry would push the load factor past [`MAX_LOAD_FACTOR`].
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn needs_growth(&self, key: &str) -> bool {
        if self.load_factor() >= MAX_LOAD_FACTOR {
            return true;
        }
        let after_insert = (self.size + 1) as f64 / self.capacity() as f64;
        after_insert > MAX_LOAD_FACTOR && !self.contains_key(key)
    }

    /// Puts the entry at the slot found by `locate`
    fn place(&mut self, key: String, value: V) -> Option<V> {
        let index = match self.locate(&key) {
            Ok(Lookup::Found(index) | Lookup::Vacant(index)) => index,
            Err(err) => {
                warn!("{err}; growing table before retrying");
                self.resize(self.capacity().saturating_mul(2));
                return self.place(key, value);
            }
        };

        let slot = self.slots.get_mut(index)?;
        match slot {
            Slot::Occupied(entry) => Some(mem::replace(&mut entry.value, value)),
            Slot::Empty | Slot::Tombstone(_) => {
                *slot = Slot::Occupied(Entry { key, value });
                self.size = self.size.saturating_add(1);
                None
            }
        }
    }

    /// Retrieve a value for a given key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        match self.slots.get(self.find(key)?) {
            Some(Slot::Occupied(entry)) => Some(&entry.value),
            _ => None,
        }
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.find(key)?;
        match self.slots.get_mut(index) {
            Some(Slot::Occupied(entry)) => Some(&mut entry.value),
            _ => None,
        }
    }

    /// Returns true if a live entry for `key` exists
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key`, leaving a tombstone in its slot.
    ///
    /// Returns the removed value. Neighbouring slots are left alone.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.find(key)?;
        let slot = self.slots.get_mut(index)?;
        match mem::replace(slot, Slot::Empty) {
            Slot::Occupied(entry) => {
                *slot = Slot::Tombstone(entry.key);
                self.size = self.size.saturating_sub(1);
                Some(entry.value)
            }
            other => {
                *slot = other;
                None
            }
        }
    }

    /// Rebuilds the table at `new_capacity`, rounded up to a prime.
    ///
    /// Every live entry is replayed through [`put`](Self::put) into a fresh
    /// table, which also drops all tombstones. Returns the final capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::BelowSize`] and leaves the table untouched if
    /// `new_capacity` is smaller than the number of live entries.
    pub fn try_resize(&mut self, new_capacity: usize) -> Result<usize, CapacityError> {
        if new_capacity < self.size {
            return Err(CapacityError::BelowSize { requested: new_capacity, size: self.size });
        }

        let capacity =
            if prime::is_prime(new_capacity) { new_capacity } else { prime::next_prime(new_capacity) };

        let mut table = Self::new(capacity, self.hash);
        if capacity == 2 {
            // `new` bumps 2 to 3; drop the extra slot to land on exactly 2.
            table.slots.truncate(2);
        }

        let old_capacity = self.capacity();
        for (key, value) in self.take_entries() {
            table.put(key, value);
        }
        *self = table;

        debug!("resized from {old_capacity} to {} slots holding {} entries", self.capacity(), self.size);
        Ok(self.capacity())
    }

    /// Rebuilds the table at `new_capacity`, silently ignoring targets smaller
    /// than the number of live entries.
    pub fn resize(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_resize(new_capacity) {
            debug!("resize ignored: {err}");
        }
    }

    /// Moves every live entry out, leaving an empty slot store behind
    fn take_entries(&mut self) -> impl Iterator<Item = (String, V)> + use<V> {
        self.size = 0;
        mem::take(&mut self.slots).into_iter().filter_map(|slot| match slot {
            Slot::Occupied(entry) => Some((entry.key, entry.value)),
            Slot::Empty | Slot::Tombstone(_) => None,
        })
    }

    /// Returns the number of live entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the current load factor of the map
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.slots.len() as f64
    }

    /// Capacity minus the number of live entries; tombstones count as empty
    #[must_use]
    pub fn empty_slot_count(&self) -> usize {
        self.capacity().saturating_sub(self.size)
    }

    /// Returns an iterator over the live entries in slot order
    #[must_use]
    pub fn entries(&self) -> Entries<'_, V> {
        Entries { slots: self.slots.iter() }
    }

    /// Clears the map, keeping its capacity
    pub fn clear(&mut self) {
        trace!("clearing {} entries from {} slots", self.size, self.capacity());
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.size = 0;
    }
}

impl<V> StringMap<V> for QuadraticProbingMap<V> {
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

impl<K, V> Extend<(K, V)> for QuadraticProbingMap<V>
where
    K: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

/// One line per slot: `i: None`, `i: K: key V: value TS: false` or
/// `i: K: key TS: true`.
impl<V: fmt::Display> fmt::Display for QuadraticProbingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{index}: None")?,
                Slot::Occupied(entry) => {
                    writeln!(f, "{index}: K: {} V: {} TS: false", entry.key, entry.value)?;
                }
                Slot::Tombstone(key) => writeln!(f, "{index}: K: {key} TS: true")?,
            }
        }
        Ok(())
    }
}

/// Iterator over the live entries of a [`QuadraticProbingMap`]
#[derive(Debug, Clone)]
pub struct Entries<'a, V> {
    /// Remaining slots
    slots: slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| match slot {
            Slot::Occupied(entry) => Some((entry.key.as_str(), &entry.value)),
            Slot::Empty | Slot::Tombstone(_) => None,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.slots.size_hint().1)
    }
}

impl<V> FusedIterator for Entries<'_, V> {}

impl<'a, V> IntoIterator for &'a QuadraticProbingMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Entries<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
