//! Writes journals and graph snapshots in replay syntax.

use std::io::Write;

use crate::engine::Command;
use crate::graph::SocialGraph;
use crate::types::SocialResult;

/// Write commands one per line.
pub fn write_journal(commands: &[Command], writer: &mut impl Write) -> SocialResult<()> {
    for command in commands {
        writeln!(writer, "{command}")?;
    }
    Ok(())
}

/// The shortest command list that rebuilds `graph`: every person sorted by
/// name, then every friendship once with the smaller name first.
pub fn snapshot_commands(graph: &SocialGraph) -> Vec<Command> {
    let names = graph.all_vertices();
    let mut commands: Vec<Command> = names
        .iter()
        .map(|name| Command::AddVertex { name: name.clone() })
        .collect();
    commands.reserve(graph.size());

    for a in &names {
        for b in graph.neighbors(a).filter(|b| a.as_str() < *b) {
            commands.push(Command::AddEdge {
                a: a.clone(),
                b: b.to_string(),
            });
        }
    }
    commands
}

/// Write a snapshot of `graph`.
pub fn write_snapshot(graph: &SocialGraph, writer: &mut impl Write) -> SocialResult<()> {
    write_journal(&snapshot_commands(graph), writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_order() {
        let mut graph = SocialGraph::new();
        graph.add_edge("C", "A");
        graph.add_edge("B", "A");
        graph.add_vertex("D");

        let mut buf = Vec::new();
        write_snapshot(&graph, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "a A\na B\na C\na D\na A B\na A C\n");
    }
}
