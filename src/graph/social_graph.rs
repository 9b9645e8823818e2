//! Core graph structure: people keyed by name with symmetric friend sets.

use std::collections::{BTreeSet, HashMap};

use crate::types::{GraphStats, Person};

use super::traversal;

/// An undirected, unweighted social graph.
///
/// Adjacency is stored on both endpoints. The edge counter is maintained on
/// every mutation rather than recomputed.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// All people, keyed by name.
    network: HashMap<String, Person>,
    /// Number of friendships.
    size: usize,
}

impl SocialGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known number of people.
    pub fn with_capacity(people: usize) -> Self {
        Self {
            network: HashMap::with_capacity(people),
            size: 0,
        }
    }

    /// Add a person with no friends. Returns `false` if the name is empty or
    /// already present.
    pub fn add_vertex(&mut self, name: &str) -> bool {
        if name.is_empty() || self.network.contains_key(name) {
            return false;
        }
        log::trace!("add vertex {name}");
        self.network.insert(name.to_string(), Person::new(name));
        true
    }

    /// Remove a person and every friendship they had.
    pub fn remove_vertex(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let Some(removed) = self.network.remove(name) else {
            return false;
        };

        self.size -= removed.degree();
        for person in self.network.values_mut() {
            person.friends.remove(name);
        }
        log::trace!("remove vertex {name} (degree {})", removed.degree());
        self.debug_check();
        true
    }

    /// Add a friendship, creating either endpoint if missing. Returns `true`
    /// only if the edge is new.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        if a == b || a.is_empty() || b.is_empty() {
            return false;
        }

        let added_ab = self
            .network
            .entry(a.to_string())
            .or_insert_with(|| Person::new(a))
            .friends
            .insert(b.to_string());
        let added_ba = self
            .network
            .entry(b.to_string())
            .or_insert_with(|| Person::new(b))
            .friends
            .insert(a.to_string());
        debug_assert_eq!(added_ab, added_ba, "asymmetric adjacency {a} / {b}");

        if added_ab && added_ba {
            self.size += 1;
            log::trace!("add edge {a} -- {b}");
            true
        } else {
            false
        }
    }

    /// Remove a friendship. Returns `false` if either person is missing or
    /// they were not friends.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> bool {
        if !self.network.contains_key(a) || !self.network.contains_key(b) {
            return false;
        }

        let removed_ab = self
            .network
            .get_mut(a)
            .is_some_and(|p| p.friends.remove(b));
        let removed_ba = self
            .network
            .get_mut(b)
            .is_some_and(|p| p.friends.remove(a));
        debug_assert_eq!(removed_ab, removed_ba, "asymmetric adjacency {a} / {b}");

        if removed_ab && removed_ba {
            self.size -= 1;
            log::trace!("remove edge {a} -- {b}");
            true
        } else {
            false
        }
    }

    /// Reset to the empty graph.
    pub fn clear(&mut self) {
        self.network.clear();
        self.size = 0;
    }

    /// Snapshot of every name in the graph.
    pub fn all_vertices(&self) -> BTreeSet<String> {
        self.network.keys().cloned().collect()
    }

    /// Snapshot of a person's friends; empty if the person is absent.
    ///
    /// The result is a copy, so callers may mutate it freely.
    pub fn adjacent(&self, name: &str) -> BTreeSet<String> {
        self.network
            .get(name)
            .map(|p| p.friends.clone())
            .unwrap_or_default()
    }

    /// Borrowed walk over a person's friends in lexicographic order.
    pub fn neighbors<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.network
            .get(name)
            .into_iter()
            .flat_map(|p| p.friends.iter().map(String::as_str))
    }

    /// Get a person record.
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.network.get(name)
    }

    /// Iterate names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.network.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.network.contains_key(name)
    }

    /// Number of friends, zero if absent.
    pub fn degree(&self, name: &str) -> usize {
        self.network.get(name).map_or(0, Person::degree)
    }

    /// Number of friendships.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of people.
    pub fn order(&self) -> usize {
        self.network.len()
    }

    pub fn is_empty(&self) -> bool {
        self.network.is_empty()
    }

    /// Number of connected components.
    pub fn components(&self) -> usize {
        traversal::components(self)
    }

    /// Friends shared by `a` and `b`.
    pub fn mutual(&self, a: &str, b: &str) -> BTreeSet<String> {
        traversal::mutual(self, a, b)
    }

    /// Shortest connection from `a` to `b`.
    pub fn connection(&self, a: &str, b: &str) -> Vec<String> {
        traversal::connection(self, a, b)
    }

    /// Order, size and component count.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            order: self.order(),
            size: self.size(),
            components: traversal::components(self),
        }
    }

    /// Check the counter and symmetry invariants. Debug builds only.
    fn debug_check(&self) {
        #[cfg(debug_assertions)]
        {
            let degree_sum: usize = self.network.values().map(Person::degree).sum();
            debug_assert_eq!(degree_sum, self.size * 2, "edge counter out of sync");
            for person in self.network.values() {
                for friend in &person.friends {
                    debug_assert!(
                        self.network
                            .get(friend)
                            .is_some_and(|f| f.friends.contains(&person.name)),
                        "dangling or asymmetric friend {friend} of {}",
                        person.name
                    );
                }
            }
        }
    }
}
