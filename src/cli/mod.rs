//! Command implementations behind the `sgraph` binary.

pub mod commands;
