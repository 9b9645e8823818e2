//! social-graph: an in-memory social network of people and friendships.
//!
//! People are vertices keyed by name, friendships are symmetric edges. The
//! graph answers membership, adjacency, component, mutual-friend and
//! shortest-connection queries. Around it sit a line-oriented command
//! replayer, a session journal that saves back to the same syntax, and the
//! `sgraph` CLI.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    Command, LineOutcome, LineStatus, NullRenderer, Renderer, ReplayReport, Replayer, Session,
};
pub use format::{load_script, open_script, snapshot_commands, write_journal, write_snapshot};
pub use graph::{components, connection, distance, mutual, SocialGraph};
pub use types::{GraphStats, Person, SocialError, SocialResult};
