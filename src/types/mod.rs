//! All data types for the social-graph library.

pub mod error;
pub mod person;

use serde::Serialize;

pub use error::{SocialError, SocialResult};
pub use person::Person;

/// Summary counters for a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Number of people.
    pub order: usize,
    /// Number of friendships.
    pub size: usize,
    /// Number of connected components.
    pub components: usize,
}
