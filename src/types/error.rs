//! Error types for the social-graph library.
//!
//! The graph engine itself never fails: mutations report `bool` and queries
//! return empty results. These errors cover everything around it.

use thiserror::Error;

/// All errors that can occur outside the graph engine.
#[derive(Error, Debug)]
pub enum SocialError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A command line has the wrong shape.
    #[error("Malformed command: {reason}")]
    Malformed { reason: String },

    /// A command line starts with an unknown token.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A query named a person that is not in the graph.
    #[error("Person {0:?} not found")]
    PersonNotFound(String),

    /// A replay finished but some lines failed.
    #[error("Replay finished with {failed} of {total} lines failed")]
    ReplayFailed { failed: usize, total: usize },
}

/// Convenience result type for social-graph operations.
pub type SocialResult<T> = Result<T, SocialError>;
