//! Command execution: parsing, sessions with a journal, and script replay.

pub mod command;
pub mod replay;
pub mod session;

pub use command::Command;
pub use replay::{LineOutcome, LineStatus, NullRenderer, Renderer, ReplayReport, Replayer};
pub use session::Session;
