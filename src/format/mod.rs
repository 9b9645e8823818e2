//! Text I/O for replay scripts and journals.
//!
//! Both use the same syntax: one command per line, fields separated by
//! whitespace. A saved journal is always a valid script.

pub mod reader;
pub mod writer;

pub use reader::{load_script, open_script};
pub use writer::{snapshot_commands, write_journal, write_snapshot};
