//! Replay commands and their one-line text form.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::types::{SocialError, SocialResult};

/// A single replayable operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// `a <name>`
    AddVertex { name: String },
    /// `a <n1> <n2>`
    AddEdge { a: String, b: String },
    /// `r <name>`
    RemoveVertex { name: String },
    /// `r <n1> <n2>`
    RemoveEdge { a: String, b: String },
    /// `s <name>`
    Search { name: String },
}

impl Command {
    /// Parse one line. Blank lines yield `Ok(None)`.
    pub fn parse_line(line: &str) -> SocialResult<Option<Self>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(None);
        }
        if !(2..=3).contains(&tokens.len()) {
            return Err(SocialError::Malformed {
                reason: format!("expected 2 or 3 fields, got {}", tokens.len()),
            });
        }

        let command = match (tokens[0], &tokens[1..]) {
            ("a", [name]) => Self::AddVertex {
                name: name.to_string(),
            },
            ("a", [a, b]) => Self::AddEdge {
                a: a.to_string(),
                b: b.to_string(),
            },
            ("r", [name]) => Self::RemoveVertex {
                name: name.to_string(),
            },
            ("r", [a, b]) => Self::RemoveEdge {
                a: a.to_string(),
                b: b.to_string(),
            },
            ("s", [name]) => Self::Search {
                name: name.to_string(),
            },
            ("s", _) => {
                return Err(SocialError::Malformed {
                    reason: "search takes exactly one name".to_string(),
                })
            }
            (other, _) => return Err(SocialError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }

    /// Whether this command changes the graph.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::Search { .. })
    }
}

impl FromStr for Command {
    type Err = SocialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s)?.ok_or_else(|| SocialError::Malformed {
            reason: "empty line".to_string(),
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddVertex { name } => write!(f, "a {name}"),
            Self::AddEdge { a, b } => write!(f, "a {a} {b}"),
            Self::RemoveVertex { name } => write!(f, "r {name}"),
            Self::RemoveEdge { a, b } => write!(f, "r {a} {b}"),
            Self::Search { name } => write!(f, "s {name}"),
        }
    }
}
