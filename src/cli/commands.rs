//! CLI command implementations.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use crate::engine::{LineStatus, Renderer, ReplayReport, Replayer, Session};
use crate::format::{load_script, open_script, write_snapshot};
use crate::graph::SocialGraph;
use crate::types::{SocialError, SocialResult};

/// Collects every search made during a replay, in order.
#[derive(Debug, Default)]
pub struct CollectingRenderer {
    pub searches: Vec<(String, Vec<String>)>,
}

impl Renderer for CollectingRenderer {
    fn render(&mut self, center: &str, neighbors: &BTreeSet<String>) {
        self.searches
            .push((center.to_string(), neighbors.iter().cloned().collect()));
    }
}

/// Replay a script, print the per-line report, and optionally save the
/// journal (or a compact snapshot) to `save`.
pub fn cmd_replay(
    script: &Path,
    save: Option<&Path>,
    compact: bool,
    json: bool,
) -> SocialResult<()> {
    let mut session = Session::new();
    let mut renderer = CollectingRenderer::default();
    let report = Replayer::new(&mut renderer).replay(&mut session, open_script(script)?)?;

    if let Some(out) = save {
        if compact {
            let file = std::fs::File::create(out)?;
            let mut writer = std::io::BufWriter::new(file);
            write_snapshot(session.graph(), &mut writer)?;
            writer.flush()?;
        } else {
            session.save_journal(out)?;
        }
    }

    let stats = session.graph().stats();
    if json {
        let searches: Vec<serde_json::Value> = renderer
            .searches
            .iter()
            .map(|(name, friends)| serde_json::json!({"name": name, "friends": friends}))
            .collect();
        let info = serde_json::json!({
            "script": script.display().to_string(),
            "success": report.success(),
            "lines": report.lines,
            "searches": searches,
            "stats": stats,
            "saved_to": save.map(|p| p.display().to_string()),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        for outcome in &report.lines {
            let status = match &outcome.status {
                LineStatus::Applied => "ok".to_string(),
                LineStatus::Rejected => "rejected".to_string(),
                LineStatus::Malformed(reason) => format!("malformed ({reason})"),
            };
            println!("{:>4}  {:<30} {}", outcome.line, outcome.text, status);
        }
        for (name, friends) in &renderer.searches {
            println!("Search {}: {}", name, format_names(friends));
        }
        println!(
            "People: {}  Relations: {}  Components: {}",
            stats.order, stats.size, stats.components
        );
        if let Some(out) = save {
            println!("Saved to {}", out.display());
        }
    }

    report.into_result().map(|_| ())
}

/// Order, size and component count after replaying a script.
pub fn cmd_stats(script: &Path, json: bool) -> SocialResult<()> {
    let graph = load_graph(script)?;
    let stats = graph.stats();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_default()
        );
    } else {
        println!("People: {}", stats.order);
        println!("Relations: {}", stats.size);
        println!("Connected components: {}", stats.components);
    }
    Ok(())
}

/// Every person, sorted by name.
pub fn cmd_vertices(script: &Path, json: bool) -> SocialResult<()> {
    let graph = load_graph(script)?;
    let names = graph.all_vertices();

    if json {
        println!("{}", serde_json::json!(names));
    } else {
        for name in &names {
            println!("{} ({} friends)", name, graph.degree(name));
        }
    }
    Ok(())
}

/// A person's friends.
pub fn cmd_neighbors(script: &Path, name: &str, json: bool) -> SocialResult<()> {
    let graph = load_graph(script)?;
    require_person(&graph, name)?;
    let friends = graph.adjacent(name);

    if json {
        println!("{}", serde_json::json!({"name": name, "friends": friends}));
    } else {
        println!("{} has {} friends", name, friends.len());
        for friend in &friends {
            println!("  {}", friend);
        }
    }
    Ok(())
}

/// Friends shared by two people.
pub fn cmd_mutual(script: &Path, a: &str, b: &str, json: bool) -> SocialResult<()> {
    let graph = load_graph(script)?;
    require_person(&graph, a)?;
    require_person(&graph, b)?;
    let shared = graph.mutual(a, b);

    if json {
        println!("{}", serde_json::json!({"a": a, "b": b, "mutual": shared}));
    } else if shared.is_empty() {
        println!("{} and {} have no mutual friends", a, b);
    } else {
        println!("Mutual friends of {} and {}:", a, b);
        for name in &shared {
            println!("  {}", name);
        }
    }
    Ok(())
}

/// Shortest chain of friendships between two people.
pub fn cmd_path(script: &Path, a: &str, b: &str, json: bool) -> SocialResult<()> {
    let graph = load_graph(script)?;
    require_person(&graph, a)?;
    require_person(&graph, b)?;
    let path = graph.connection(a, b);

    if json {
        let hops = path.len().checked_sub(1);
        println!(
            "{}",
            serde_json::json!({"from": a, "to": b, "path": path, "hops": hops})
        );
    } else if path.is_empty() {
        println!("No connection between {} and {}", a, b);
    } else {
        println!("{} ({} hops)", path.join(" -> "), path.len() - 1);
    }
    Ok(())
}

/// Replay a script and keep the graph. Failed lines are logged, not fatal.
fn load_graph(script: &Path) -> SocialResult<SocialGraph> {
    let (session, report) = load_script(script)?;
    warn_failures(script, &report);
    Ok(session.into_graph())
}

fn warn_failures(script: &Path, report: &ReplayReport) {
    if !report.success() {
        log::warn!(
            "{}: {} of {} lines failed",
            script.display(),
            report.failed(),
            report.total()
        );
    }
}

fn require_person(graph: &SocialGraph, name: &str) -> SocialResult<()> {
    if graph.contains(name) {
        Ok(())
    } else {
        Err(SocialError::PersonNotFound(name.to_string()))
    }
}

fn format_names(names: &[String]) -> String {
    if names.is_empty() {
        "(no friends)".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(format_names(&[]), "(no friends)");
        assert_eq!(format_names(&["A".into(), "B".into()]), "A, B");
    }

    #[test]
    fn test_require_person() {
        let mut graph = SocialGraph::new();
        graph.add_vertex("A");
        assert!(require_person(&graph, "A").is_ok());
        assert!(matches!(
            require_person(&graph, "B"),
            Err(SocialError::PersonNotFound(_))
        ));
    }
}
