//! Error types reported by the maps.

/// Reason a resize request was rejected.
///
/// A rejected resize leaves the table exactly as it was.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CapacityError {
    /// The requested capacity is smaller than the number of live entries of an
    /// open-addressing table.
    #[error("requested capacity {requested} cannot hold the {size} live entries")]
    BelowSize {
        /// Capacity passed to the resize call.
        requested: usize,
        /// Number of live entries at the time of the call.
        size: usize,
    },

    /// A chaining table needs at least one bucket.
    #[error("requested capacity must be at least 1")]
    Zero,
}

/// A probe sequence visited every slot without finding the key or a free slot.
///
/// This only happens if the load factor bound was broken, so the maps treat it
/// as a recoverable internal fault rather than surfacing it to callers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// All `capacity` probe positions were occupied by other keys.
    #[error("probe sequence for key {key:?} exhausted all {capacity} slots")]
    Exhausted {
        /// Key being looked up or inserted.
        key: String,
        /// Capacity of the table that was probed.
        capacity: usize,
    },
}
