//! In-memory social graph and its structural queries.

pub mod social_graph;
pub mod traversal;

pub use social_graph::SocialGraph;
pub use traversal::{components, connection, distance, mutual};
