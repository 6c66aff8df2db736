//! Presence/absence value container.
//!
//! A [`Slot`] is the storage cell of every trie node and the result type of
//! [`Trie::try_get`](crate::Trie::try_get).

use std::fmt;

use crate::{Result, TrieError};

/// A value container with exactly two states: empty, or holding a value.
///
/// # Examples
///
/// ```
/// use char_trie::Slot;
///
/// let slot = Slot::of(3);
/// assert!(slot.is_present());
/// assert_eq!(slot.map(|v| v * 2).value_or(0), 6);
///
/// let empty: Slot<i32> = Slot::empty();
/// assert!(empty.force_value().is_err());
/// assert_eq!(empty.to_string(), "<none>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot<V> {
    /// No value
    Empty,
    /// A value is present
    Holds(V),
}

impl<V> Slot<V> {
    /// Creates an empty slot.
    pub fn empty() -> Self {
        Slot::Empty
    }

    /// Creates a slot holding `value`.
    pub fn of(value: V) -> Self {
        Slot::Holds(value)
    }

    /// Returns `true` if the slot holds a value.
    pub fn is_present(&self) -> bool {
        matches!(self, Slot::Holds(_))
    }

    /// Returns `true` if the slot is empty.
    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Returns a reference to the held value, or [`TrieError::EmptySlot`].
    pub fn force_value(&self) -> Result<&V> {
        match self {
            Slot::Holds(value) => Ok(value),
            Slot::Empty => Err(TrieError::EmptySlot),
        }
    }

    /// Consumes the slot and returns the held value, or [`TrieError::EmptySlot`].
    pub fn into_value(self) -> Result<V> {
        match self {
            Slot::Holds(value) => Ok(value),
            Slot::Empty => Err(TrieError::EmptySlot),
        }
    }

    /// Borrows the held value as a `Slot<&V>`.
    pub fn as_ref(&self) -> Slot<&V> {
        match self {
            Slot::Holds(value) => Slot::Holds(value),
            Slot::Empty => Slot::Empty,
        }
    }

    /// Takes the value out, leaving the slot empty.
    pub fn take(&mut self) -> Slot<V> {
        std::mem::replace(self, Slot::Empty)
    }

    /// Applies `f` to the held value.
    pub fn map<U, F>(self, f: F) -> Slot<U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Slot::Holds(value) => Slot::Holds(f(value)),
            Slot::Empty => Slot::Empty,
        }
    }

    /// Chains a computation that may itself produce an empty slot.
    pub fn and_then<U, F>(self, f: F) -> Slot<U>
    where
        F: FnOnce(V) -> Slot<U>,
    {
        match self {
            Slot::Holds(value) => f(value),
            Slot::Empty => Slot::Empty,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        match self {
            Slot::Holds(value) if predicate(&value) => Slot::Holds(value),
            _ => Slot::Empty,
        }
    }

    /// Runs `f` on the value if present; does nothing otherwise.
    pub fn for_each<F>(self, f: F)
    where
        F: FnOnce(V),
    {
        if let Slot::Holds(value) = self {
            f(value);
        }
    }

    /// Returns the held value or `default`.
    pub fn value_or(self, default: V) -> V {
        match self {
            Slot::Holds(value) => value,
            Slot::Empty => default,
        }
    }

    /// Returns the held value or `V::default()`.
    pub fn value_or_default(self) -> V
    where
        V: Default,
    {
        match self {
            Slot::Holds(value) => value,
            Slot::Empty => V::default(),
        }
    }

    /// Folds both states into a single result.
    pub fn match_with<R, N, S>(self, none: N, some: S) -> R
    where
        N: FnOnce() -> R,
        S: FnOnce(V) -> R,
    {
        match self {
            Slot::Holds(value) => some(value),
            Slot::Empty => none(),
        }
    }
}

impl<V: Clone> Slot<&V> {
    /// Clones the referenced value into an owned slot.
    pub fn cloned(self) -> Slot<V> {
        self.map(V::clone)
    }
}

impl<V: Copy> Slot<&V> {
    /// Copies the referenced value into an owned slot.
    pub fn copied(self) -> Slot<V> {
        self.map(|value| *value)
    }
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<V> From<Option<V>> for Slot<V> {
    fn from(option: Option<V>) -> Self {
        match option {
            Some(value) => Slot::Holds(value),
            None => Slot::Empty,
        }
    }
}

impl<V> From<Slot<V>> for Option<V> {
    fn from(slot: Slot<V>) -> Self {
        match slot {
            Slot::Holds(value) => Some(value),
            Slot::Empty => None,
        }
    }
}

impl<V: fmt::Display> fmt::Display for Slot<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Holds(value) => value.fmt(f),
            Slot::Empty => write!(f, "<none>"),
        }
    }
}

impl<V> IntoIterator for Slot<V> {
    type Item = V;
    type IntoIter = std::option::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}

// Serialised as an `Option<V>`
#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for Slot<V> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Slot::Holds(value) => serializer.serialize_some(value),
            Slot::Empty => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de>> serde::Deserialize<'de> for Slot<V> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<V>::deserialize(deserializer).map(Slot::from)
    }
}
