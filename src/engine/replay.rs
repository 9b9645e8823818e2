//! Line-by-line command replay with a per-line report.

use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::Path;

use serde::Serialize;

use crate::types::{SocialError, SocialResult};

use super::command::Command;
use super::session::Session;

/// Receives the neighborhood of a searched person. Read-only by construction.
pub trait Renderer {
    fn render(&mut self, center: &str, neighbors: &BTreeSet<String>);
}

/// Renderer that ignores every search.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _center: &str, _neighbors: &BTreeSet<String>) {}
}

/// Outcome of one non-blank line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum LineStatus {
    /// The command ran and reported success.
    Applied,
    /// The command ran and reported failure (duplicate, missing, self-loop).
    Rejected,
    /// The line could not be parsed.
    Malformed(String),
}

/// One entry in a replay report.
#[derive(Debug, Clone, Serialize)]
pub struct LineOutcome {
    /// 1-based line number in the script.
    pub line: usize,
    /// The line as read, trimmed.
    pub text: String,
    #[serde(flatten)]
    pub status: LineStatus,
}

/// Result of replaying a whole script.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplayReport {
    pub lines: Vec<LineOutcome>,
}

impl ReplayReport {
    /// True if every non-blank line was applied.
    pub fn success(&self) -> bool {
        self.lines.iter().all(|l| l.status == LineStatus::Applied)
    }

    pub fn total(&self) -> usize {
        self.lines.len()
    }

    pub fn failed(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| l.status != LineStatus::Applied)
            .count()
    }

    /// Outcomes that were not applied.
    pub fn failures(&self) -> impl Iterator<Item = &LineOutcome> {
        self.lines.iter().filter(|l| l.status != LineStatus::Applied)
    }

    /// Turn a report with failures into `SocialError::ReplayFailed`.
    pub fn into_result(self) -> SocialResult<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(SocialError::ReplayFailed {
                failed: self.failed(),
                total: self.total(),
            })
        }
    }
}

/// Drives a session from a command stream.
pub struct Replayer<'r> {
    renderer: &'r mut dyn Renderer,
}

impl<'r> Replayer<'r> {
    pub fn new(renderer: &'r mut dyn Renderer) -> Self {
        Self { renderer }
    }

    /// Replay every line of `reader` into `session`.
    ///
    /// Malformed and failing lines, including lines that are not valid
    /// UTF-8, are recorded and skipped. Only a read error stops the replay.
    pub fn replay(
        &mut self,
        session: &mut Session,
        mut reader: impl BufRead,
    ) -> SocialResult<ReplayReport> {
        let mut report = ReplayReport::default();

        let mut buf: Vec<u8> = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let (text, status) = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let text = line.trim();
                    let status = match Command::parse_line(text) {
                        Ok(None) => continue,
                        Ok(Some(command)) => {
                            if session.apply(command, self.renderer) {
                                LineStatus::Applied
                            } else {
                                LineStatus::Rejected
                            }
                        }
                        Err(e) => LineStatus::Malformed(e.to_string()),
                    };
                    (text.to_string(), status)
                }
                Err(_) => (
                    String::from_utf8_lossy(&buf).trim().to_string(),
                    LineStatus::Malformed("invalid UTF-8".to_string()),
                ),
            };
            if status != LineStatus::Applied {
                log::warn!("line {}: {:?} -> {:?}", line_no, text, status);
            }
            report.lines.push(LineOutcome {
                line: line_no,
                text,
                status,
            });
        }

        log::debug!(
            "replayed {} lines, {} failed",
            report.total(),
            report.failed()
        );
        Ok(report)
    }

    /// Replay a script file.
    pub fn replay_file(&mut self, session: &mut Session, path: &Path) -> SocialResult<ReplayReport> {
        let reader = crate::format::open_script(path)?;
        self.replay(session, reader)
    }
}
