//! # strmap
//!
//! String-keyed hash maps built from first principles over prime-sized slot
//! tables.
//!
//! This crate provides two interchangeable hash map implementations:
//!
//! - `QuadraticProbingMap`: open addressing with quadratic probing and tombstone deletion
//! - `ChainingMap`: separate chaining with a singly linked list per bucket
//!
//! Both implement [`StringMap`], keep their capacity prime and grow by
//! rebuilding the table at twice the capacity (rounded up to a prime) and
//! replaying every entry. [`find_mode`] uses the chaining map to count
//! frequencies.
//!
//! ## Basic Usage
//!
//! ```rust
//! use strmap::{QuadraticProbingMap, hashing::additive_hash};
//!
//! // Create a new hash map; 10 is rounded up to 11 slots
//! let mut map = QuadraticProbingMap::new(10, additive_hash);
//! assert_eq!(map.capacity(), 11);
//!
//! // Insert values
//! map.put("apple", 1);
//! map.put("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.put("apple", 10);
//! assert_eq!(map.get("apple"), Some(&10));
//! assert_eq!(map.len(), 2);
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Swapping Strategies
//!
//! ```rust
//! use strmap::{ChainingMap, QuadraticProbingMap, StringMap, hashing::positional_hash};
//!
//! fn count_words<M: StringMap<usize>>(map: &mut M, text: &str) {
//!     for word in text.split_whitespace() {
//!         let count = map.get(word).copied().unwrap_or(0);
//!         map.put(word.to_string(), count + 1);
//!     }
//! }
//!
//! let text = "the quick fox jumps over the lazy dog the end";
//!
//! let mut probing = QuadraticProbingMap::new(5, positional_hash);
//! let mut chaining = ChainingMap::new(5, positional_hash);
//! count_words(&mut probing, text);
//! count_words(&mut chaining, text);
//!
//! assert_eq!(probing.get("the"), Some(&3));
//! assert_eq!(chaining.get("the"), Some(&3));
//! assert_eq!(probing.len(), chaining.len());
//! ```

/// Singly linked list buckets for separate chaining
pub mod chain;
/// Module implementing the separate-chaining map
pub mod chaining;
/// Error types
mod error;
/// String hash functions
pub mod hashing;
/// The trait shared by both maps
mod map;
/// Mode finding on top of the chaining map
mod mode;
/// Module implementing the quadratic-probing map
pub mod open_addressing;
/// Prime helpers used to size tables
pub mod prime;
/// Utility traits for the maps
mod utils;

pub use chaining::ChainingMap;
pub use error::{CapacityError, ProbeError};
pub use map::StringMap;
pub use mode::{Mode, find_mode};
pub use open_addressing::QuadraticProbingMap;
pub use utils::MapExtensions;

