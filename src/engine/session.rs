//! A graph plus the journal of every command issued against it.

use std::io::Write;
use std::path::Path;

use crate::format::write_journal;
use crate::graph::SocialGraph;
use crate::types::SocialResult;

use super::command::Command;
use super::replay::Renderer;

/// Owns a graph and records each command applied to it, successful or not.
#[derive(Debug, Default)]
pub struct Session {
    graph: SocialGraph,
    journal: Vec<Command>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session over an existing graph with an empty journal.
    pub fn with_graph(graph: SocialGraph) -> Self {
        Self {
            graph,
            journal: Vec::new(),
        }
    }

    pub fn graph(&self) -> &SocialGraph {
        &self.graph
    }

    pub fn journal(&self) -> &[Command] {
        &self.journal
    }

    /// Apply one command and journal it. Returns the command's outcome.
    ///
    /// `Search` succeeds only if the person exists, in which case the
    /// renderer receives their current friends.
    pub fn apply(&mut self, command: Command, renderer: &mut dyn Renderer) -> bool {
        let ok = match &command {
            Command::AddVertex { name } => self.graph.add_vertex(name),
            Command::AddEdge { a, b } => self.graph.add_edge(a, b),
            Command::RemoveVertex { name } => self.graph.remove_vertex(name),
            Command::RemoveEdge { a, b } => self.graph.remove_edge(a, b),
            Command::Search { name } => match self.graph.person(name) {
                Some(person) => {
                    renderer.render(name, &person.friends);
                    true
                }
                None => false,
            },
        };
        self.journal.push(command);
        ok
    }

    /// Reset the graph and forget the journal.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.journal.clear();
    }

    /// Write the journal in replay syntax.
    pub fn save_journal_to(&self, writer: &mut impl Write) -> SocialResult<()> {
        write_journal(&self.journal, writer)
    }

    /// Write the journal to a file, replacing it.
    pub fn save_journal(&self, path: &Path) -> SocialResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.save_journal_to(&mut writer)?;
        writer.flush()?;
        log::debug!(
            "saved {} journal entries to {}",
            self.journal.len(),
            path.display()
        );
        Ok(())
    }

    /// Consume the session, keeping the graph.
    pub fn into_graph(self) -> SocialGraph {
        self.graph
    }
}
