//! Internal node implementation for the trie.
//!
//! This module contains the `Node` structure that forms the backbone of the
//! trie. Every node matches one character of a key at its depth and
//! exclusively owns its children, so the tree has no sharing and no cycles.

use tracing::trace;

use crate::cursor::Cursor;
use crate::slot::Slot;

/// Outcome of offering a write to a node.
#[derive(Debug)]
pub(crate) enum SetOutcome<V> {
    /// The write landed in this node or one of its descendants.
    Handled,
    /// The cursor's character is not this node's; the unused slot is handed
    /// back to the caller.
    NoMatch(Slot<V>),
}

/// Internal node type for the trie.
///
/// Each node contains the character it represents, an optional value, and
/// an unordered list of children. No two children of a node represent the
/// same character.
///
/// Keys may be arbitrarily long, so every walk over the tree (lookups,
/// writes, enumeration, cloning and dropping) uses a loop or a heap stack
/// rather than native recursion.
pub(crate) struct Node<V> {
    /// The character matched at this depth; `None` only for the root
    pub represented: Option<char>,

    /// The value stored for a key that ends at this node
    pub slot: Slot<V>,

    /// Child nodes, scanned linearly and in no particular order
    pub children: Vec<Node<V>>,
}

impl<V> Node<V> {
    /// Creates an empty node matching `represented`
    pub fn new(represented: Option<char>) -> Self {
        Node {
            represented,
            slot: Slot::Empty,
            children: Vec::new(),
        }
    }

    /// Creates the root node, which matches the cursor's sentinel
    pub fn root() -> Self {
        Node::new(None)
    }

    /// Index of the child representing `character`, if there is one
    fn child_index(&self, character: Option<char>) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.represented == character)
    }

    /// Stores `slot` at the node addressed by `cursor`.
    ///
    /// An empty slot never creates nodes: clearing a key that is not present
    /// is reported as handled without touching the tree.
    pub fn try_set(&mut self, cursor: Cursor<'_>, slot: Slot<V>) -> SetOutcome<V> {
        if cursor.current() != self.represented {
            return SetOutcome::NoMatch(slot);
        }

        let mut node = self;
        let mut cursor = cursor;
        while !cursor.at_end() {
            let next = descend(cursor);

            let index = match node.child_index(next.current()) {
                Some(index) => index,
                None if slot.is_empty() => {
                    trace!(
                        character = ?next.current(),
                        rest = next.rest(),
                        "no value to clear"
                    );
                    return SetOutcome::Handled;
                }
                None => {
                    trace!(
                        character = ?next.current(),
                        position = next.position(),
                        "growing branch"
                    );
                    node.children.push(Node::new(next.current()));
                    node.children.len() - 1
                }
            };

            node = &mut node.children[index];
            cursor = next;
        }

        node.slot = slot;
        SetOutcome::Handled
    }

    /// Looks up the slot addressed by `cursor`.
    pub fn try_get(&self, cursor: Cursor<'_>) -> Slot<&V> {
        if cursor.current() != self.represented {
            return Slot::Empty;
        }

        let mut node = self;
        let mut cursor = cursor;
        while !cursor.at_end() {
            let next = descend(cursor);
            match node.child_index(next.current()) {
                Some(index) => node = &node.children[index],
                None => return Slot::Empty,
            }
            cursor = next;
        }

        node.slot.as_ref()
    }

    /// Iterates over this node and all of its descendants, pre-order
    pub fn nodes(&self) -> Nodes<'_, V> {
        Nodes { stack: vec![self] }
    }

    /// Appends every value in this subtree to `into`, pre-order.
    pub fn collect_values<'a>(&'a self, into: &mut Vec<&'a V>) {
        into.extend(self.nodes().filter_map(|node| match &node.slot {
            Slot::Holds(value) => Some(value),
            Slot::Empty => None,
        }));
    }

    /// Returns the number of values stored in this subtree
    pub fn value_count(&self) -> usize {
        self.nodes().filter(|node| node.slot.is_present()).count()
    }

    /// Returns the number of nodes in this subtree, this one included
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }
}

/// Pre-order traversal over a subtree, driven by a heap-allocated stack.
pub(crate) struct Nodes<'a, V> {
    stack: Vec<&'a Node<V>>,
}

impl<'a, V> Iterator for Nodes<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is visited first.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<V: Clone> Clone for Node<V> {
    fn clone(&self) -> Self {
        // Each frame pairs a source node with the clones of its children
        // finished so far; a frame is complete once every child is cloned.
        let mut frames = vec![(self, Vec::with_capacity(self.children.len()))];

        while let Some((source, children)) = frames.pop() {
            if let Some(child) = source.children.get(children.len()) {
                frames.push((source, children));
                frames.push((child, Vec::with_capacity(child.children.len())));
                continue;
            }

            let copy = Node {
                represented: source.represented,
                slot: source.slot.clone(),
                children,
            };
            match frames.last_mut() {
                Some((_, siblings)) => siblings.push(copy),
                None => return copy,
            }
        }

        unreachable!("the root frame is completed last")
    }
}

impl<V> Drop for Node<V> {
    fn drop(&mut self) {
        // Detach descendants onto a flat list so each node drops childless.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Moves the cursor to the next character.
///
/// Callers check `at_end` first, so running off the key is a broken
/// invariant rather than a recoverable error.
fn descend(cursor: Cursor<'_>) -> Cursor<'_> {
    match cursor.advance() {
        Ok(next) => next,
        Err(err) => panic!("trie traversal overran its key: {}", err),
    }
}
