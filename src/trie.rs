//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for working
//! with the character-keyed trie.

use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;

use tracing::trace;

use crate::cursor::Cursor;
use crate::node::{Node, SetOutcome};
use crate::slot::Slot;
use crate::{Result, TrieError};

/// A mutable dictionary-style lookup from strings to values.
///
/// Keys are matched one `char` per level. Every public operation walks the
/// key with a [`Cursor`] starting at the root, which represents the position
/// before the first character.
///
/// The tree only grows: [`remove`](Trie::remove) clears a key's value but
/// keeps the nodes that spelled it. The order in which
/// [`values`](Trie::values) yields items is unspecified.
#[derive(Clone)]
pub struct Trie<V> {
    /// The root node of the trie
    pub(crate) root: Node<V>,
}

impl<V> Trie<V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let trie = Trie::<i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie { root: Node::root() }
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.set("x", 1);
    /// trie.set("x", 2);
    ///
    /// assert_eq!(trie.get("x"), Ok(&2));
    /// ```
    pub fn set(&mut self, key: &str, value: V) {
        self.write(key, Slot::of(value));
    }

    /// Clears the value stored under `key`, if any.
    ///
    /// Nodes are never pruned, so the tree keeps its shape after a removal.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.set("cat", 1);
    /// trie.remove("cat");
    /// trie.remove("dog");
    ///
    /// assert!(trie.try_get("cat").is_empty());
    /// ```
    pub fn remove(&mut self, key: &str) {
        self.write(key, Slot::Empty);
    }

    fn write(&mut self, key: &str, slot: Slot<V>) {
        let outcome = self.root.try_set(Cursor::new(key), slot);
        // The root matches every cursor's starting sentinel.
        debug_assert!(
            matches!(outcome, SetOutcome::Handled),
            "root rejected key {:?}",
            key
        );
    }

    /// Looks up `key` without failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::{Slot, Trie};
    ///
    /// let mut trie = Trie::new();
    /// trie.set("hello", 42);
    ///
    /// assert_eq!(trie.try_get("hello"), Slot::of(&42));
    /// assert_eq!(trie.try_get("world"), Slot::Empty);
    /// ```
    pub fn try_get(&self, key: &str) -> Slot<&V> {
        self.root.try_get(Cursor::new(key))
    }

    /// Returns the value stored under `key`, or [`TrieError::KeyNotFound`].
    ///
    /// Use [`try_get`](Trie::try_get) or [`contains_key`](Trie::contains_key)
    /// to test for presence.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::{Trie, TrieError};
    ///
    /// let mut trie = Trie::new();
    /// trie.set("", 5);
    ///
    /// assert_eq!(trie.get(""), Ok(&5));
    /// assert_eq!(trie.get("a"), Err(TrieError::KeyNotFound("a".to_string())));
    /// ```
    pub fn get(&self, key: &str) -> Result<&V> {
        match self.try_get(key) {
            Slot::Holds(value) => Ok(value),
            Slot::Empty => Err(TrieError::KeyNotFound(key.to_string())),
        }
    }

    /// Returns `true` if the trie holds a value for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.try_get(key).is_present()
    }

    /// Returns a snapshot of every stored value, in unspecified order.
    ///
    /// Each call walks the tree again; the result is not a live view.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.set("a", 1);
    /// trie.set("b", 2);
    /// trie.set("c", 3);
    ///
    /// let mut values: Vec<i32> = trie.values().into_iter().copied().collect();
    /// values.sort();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn values(&self) -> Vec<&V> {
        let mut values = Vec::new();
        self.root.collect_values(&mut values);
        trace!(count = values.len(), "collected values");
        values
    }

    /// Returns the number of values stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.set("hello", 42);
    /// assert_eq!(trie.len(), 1);
    ///
    /// trie.remove("hello");
    /// assert_eq!(trie.len(), 0);
    /// ```
    pub fn len(&self) -> usize {
        self.root.value_count()
    }

    /// Returns `true` if the trie contains no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes in the tree, the root included.
    ///
    /// This only ever grows, since removals leave their nodes in place.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

// Written out so formatting a deep trie does not recurse through its nodes.
impl<V: fmt::Debug> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("values", &self.values())
            .field("nodes", &self.node_count())
            .finish()
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Index<&str> for Trie<V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` has no value.
    fn index(&self, key: &str) -> &V {
        match self.get(key) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for Trie<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key.as_ref(), value);
        }
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for Trie<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = &'a V;
    type IntoIter = std::vec::IntoIter<&'a V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values().into_iter()
    }
}
