//! Singly linked list used as a separate-chaining bucket.

use std::{fmt, iter::FusedIterator};

/// A node in the chain
#[derive(Debug, Clone)]
struct Node<V> {
    /// The key stored in the node
    key: String,
    /// The value associated with the key
    value: V,
    /// The rest of the chain
    next: Option<Box<Node<V>>>,
}

/// A bucket of key-value pairs kept in insertion order.
///
/// The chain does not check for duplicate keys on [`push_back`](Self::push_back);
/// the map owning it looks the key up first.
#[derive(Debug, Clone)]
pub struct Chain<V> {
    /// First node, if any
    head: Option<Box<Node<V>>>,
    /// Number of nodes
    len: usize,
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Chain<V> {
    /// Creates an empty chain
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Appends a node at the tail
    pub fn push_back(&mut self, key: String, value: V) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { key, value, next: None }));
        self.len = self.len.saturating_add(1);
    }

    /// Returns the value of the node holding `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.iter().find(|&(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value of the node holding `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.key == key {
                return Some(&mut node.value);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Returns true if a node holds `key`
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Unlinks the first node holding `key` and returns its value
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.key != key) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }

        let removed = cursor.take()?;
        let Node { value, next, .. } = *removed;
        *cursor = next;
        self.len = self.len.saturating_sub(1);
        Some(value)
    }

    /// Unlinks the first node and returns its entry
    pub fn pop_front(&mut self) -> Option<(String, V)> {
        let node = self.head.take()?;
        let Node { key, value, next } = *node;
        self.head = next;
        self.len = self.len.saturating_sub(1);
        Some((key, value))
    }

    /// Number of nodes in the chain
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the chain has no nodes
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterates over the nodes in insertion order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { next: self.head.as_deref() }
    }
}

impl<V> Drop for Chain<V> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop can overflow the
        // stack on long chains.
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
    }
}

/// Renders as `[(key: value) -> (key: value)]`
impl<V: fmt::Display> fmt::Display for Chain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "({key}: {value})")?;
        }
        f.write_str("]")
    }
}

/// Iterator over the nodes of a [`Chain`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Next node to yield
    next: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some((node.key.as_str(), &node.value))
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a Chain<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over the entries of a [`Chain`]
#[derive(Debug)]
pub struct IntoIter<V> {
    /// Chain being drained from the front
    chain: Chain<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.len(), Some(self.chain.len()))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}

impl<V> IntoIterator for Chain<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { chain: self }
    }
}
