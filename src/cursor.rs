//! Zero-copy traversal position over a key.

use crate::{Result, TrieError};

/// An immutable position within a string, used to walk a key one `char` at a
/// time without allocating substrings.
///
/// A fresh cursor sits *before* the first character, on a sentinel position
/// whose [`current`](Cursor::current) is `None`. The trie's root node matches
/// that sentinel, so an empty key addresses the root directly.
///
/// # Examples
///
/// ```
/// use char_trie::Cursor;
///
/// let cursor = Cursor::new("ab");
/// assert_eq!(cursor.current(), None);
/// assert!(!cursor.at_end());
///
/// let cursor = cursor.advance().unwrap();
/// assert_eq!(cursor.current(), Some('a'));
///
/// let cursor = cursor.advance().unwrap();
/// assert_eq!(cursor.current(), Some('b'));
/// assert!(cursor.at_end());
/// assert!(cursor.advance().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Character index of `current`; -1 on the sentinel
    position: isize,
    /// Byte offset of `current` within `source`
    offset: usize,
    /// Length of `source` in characters
    len: usize,
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned on the sentinel before `source`.
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            position: -1,
            offset: 0,
            len: source.chars().count(),
            current: None,
        }
    }

    /// Returns a cursor one character further along.
    ///
    /// Fails with [`TrieError::CursorOutOfRange`] when the cursor is already on
    /// the last character (or on the sentinel of an empty string).
    pub fn advance(&self) -> Result<Self> {
        let position = self.position + 1;
        if position >= self.len as isize {
            return Err(TrieError::CursorOutOfRange {
                position: position as usize,
                len: self.len,
            });
        }

        let offset = match self.current {
            Some(c) => self.offset + c.len_utf8(),
            None => 0,
        };

        Ok(Cursor {
            source: self.source,
            position,
            offset,
            len: self.len,
            current: self.source[offset..].chars().next(),
        })
    }

    /// The character under the cursor, or `None` on the sentinel.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Character index of the cursor; `-1` on the sentinel.
    pub fn position(&self) -> isize {
        self.position
    }

    /// Number of characters from the cursor (inclusive) to the end of the
    /// string. The sentinel counts as one.
    pub fn remaining_len(&self) -> usize {
        (self.len as isize - self.position) as usize
    }

    /// Whether the cursor is on the last position it can occupy.
    pub fn at_end(&self) -> bool {
        self.remaining_len() <= 1
    }

    /// The string being traversed.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The unvisited part of the string after `current`, borrowed from the
    /// source.
    pub fn rest(&self) -> &'a str {
        match self.current {
            Some(c) => &self.source[self.offset + c.len_utf8()..],
            None => self.source,
        }
    }
}
