//! # Char Trie
//!
//! A mutable, character-keyed trie with explicit presence/absence lookups.
//!
//! The trie maps string keys to values one `char` per level. Lookups return a
//! [`Slot`], which is either empty or holds a value, so callers never have to
//! probe a failing accessor to find out whether a key exists.
//!
//! ## Features
//!
//! - **Zero-copy traversal**: keys are walked with a [`Cursor`] that borrows the
//!   caller's string and never allocates substrings
//! - **Explicit absence**: [`Trie::try_get`] returns a [`Slot`] instead of failing
//! - **Any key**: every string is a valid key, including the empty string
//! - **Grow-only tree**: removing a key clears its value but keeps its nodes
//!
//! ## Example
//!
//! ```rust
//! use char_trie::Trie;
//!
//! let mut trie = Trie::new();
//!
//! trie.set("cat", 1);
//! trie.set("car", 2);
//!
//! assert_eq!(trie.get("cat"), Ok(&1));
//! assert!(trie.try_get("ca").is_empty());
//!
//! trie.remove("cat");
//! assert!(!trie.contains_key("cat"));
//! assert_eq!(trie["car"], 2);
//! ```

mod cursor;
mod node;
mod slot;
mod trie;

// Re-export public types
pub use crate::cursor::Cursor;
pub use crate::slot::Slot;
pub use crate::trie::Trie;

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// A value was forced out of an empty slot
    #[error("the slot does not hold a value")]
    EmptySlot,
    /// The key has no value in the trie
    #[error("key not found: {0:?}")]
    KeyNotFound(String),
    /// A cursor was advanced past the last character of its string
    #[error("cursor advanced to position {position} of a {len}-character string")]
    CursorOutOfRange {
        /// Position the cursor would have moved to
        position: usize,
        /// Length of the string in characters
        len: usize,
    },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, TrieError>;
