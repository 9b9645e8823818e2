//! The vertex record.

use std::collections::BTreeSet;

use serde::Serialize;

/// A person in the network: a unique name plus the names of their friends.
///
/// Friends are kept in a `BTreeSet`, so every walk over them is in
/// lexicographic order. Shortest-path tie-breaking relies on this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    /// Unique name, also the key in the graph.
    pub name: String,
    /// Names this person shares an edge with.
    pub friends: BTreeSet<String>,
}

impl Person {
    /// Create a person with no friends.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            friends: BTreeSet::new(),
        }
    }

    /// Number of friends.
    pub fn degree(&self) -> usize {
        self.friends.len()
    }
}
