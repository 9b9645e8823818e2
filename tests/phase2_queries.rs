//! Phase 2 tests: components, mutual friends and shortest connections.

use std::collections::{BTreeSet, HashMap, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use social_graph::graph::{components, connection, distance, mutual, SocialGraph};

const PEOPLE: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

// ==================== Helper ====================

fn with_people() -> SocialGraph {
    let mut graph = SocialGraph::new();
    for name in PEOPLE {
        graph.add_vertex(name);
    }
    graph
}

fn with_edges(edges: &[(&str, &str)]) -> SocialGraph {
    let mut graph = with_people();
    for (a, b) in edges {
        graph.add_edge(a, b);
    }
    graph
}

fn path(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn random_graph(seed: u64, people: usize, edges: usize) -> SocialGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = SocialGraph::with_capacity(people);
    for i in 0..people {
        graph.add_vertex(&format!("p{i}"));
    }
    for _ in 0..edges {
        let a = rng.gen_range(0..people);
        let b = rng.gen_range(0..people);
        graph.add_edge(&format!("p{a}"), &format!("p{b}"));
    }
    graph
}

/// Hop counts from `start` computed independently of the library.
fn hop_counts(graph: &SocialGraph, start: &str) -> HashMap<String, usize> {
    let mut hops = HashMap::new();
    let mut queue = VecDeque::new();
    hops.insert(start.to_string(), 0);
    queue.push_back(start.to_string());
    while let Some(current) = queue.pop_front() {
        let d = hops[&current];
        for friend in graph.adjacent(&current) {
            if !hops.contains_key(&friend) {
                hops.insert(friend.clone(), d + 1);
                queue.push_back(friend);
            }
        }
    }
    hops
}

// ==================== Component Tests ====================

#[test]
fn test_components_edgeless() {
    let graph = with_people();
    assert_eq!(components(&graph), PEOPLE.len());
    assert_eq!(components(&SocialGraph::new()), 0);
}

#[test]
fn test_components_join_and_split() {
    let mut graph = with_people();
    let n = PEOPLE.len();
    graph.add_edge(PEOPLE[0], PEOPLE[1]);
    graph.add_edge(PEOPLE[1], PEOPLE[2]);
    graph.add_edge(PEOPLE[4], PEOPLE[5]);
    assert_eq!(graph.components(), n - 3);

    graph.add_edge(PEOPLE[1], PEOPLE[4]);
    assert_eq!(graph.components(), n - 4);

    graph.remove_vertex(PEOPLE[1]);
    assert_eq!(graph.components(), n - 2);

    graph.remove_vertex(PEOPLE[4]);
    assert_eq!(graph.components(), n - 2);
}

#[test]
fn test_components_after_removing_f() {
    let mut graph = with_edges(&[
        ("A", "B"),
        ("A", "F"),
        ("B", "E"),
        ("E", "F"),
        ("A", "H"),
        ("B", "C"),
        ("H", "C"),
    ]);
    assert_eq!(graph.components(), 3);
    graph.remove_vertex("F");
    assert_eq!(graph.components(), 3);
    assert_eq!(graph.size(), 5);

    let stats = graph.stats();
    assert_eq!((stats.order, stats.size, stats.components), (7, 5, 3));
}

#[test]
fn test_components_match_reachability() {
    for seed in 0..5 {
        let graph = random_graph(seed, 60, 45);
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut expected = 0;
        for name in graph.all_vertices() {
            if seen.contains(&name) {
                continue;
            }
            expected += 1;
            seen.extend(hop_counts(&graph, &name).into_keys());
        }
        assert_eq!(components(&graph), expected, "seed {seed}");
    }
}

// ==================== Mutual Tests ====================

#[test]
fn test_mutual() {
    let graph = with_edges(&[
        ("A", "B"),
        ("A", "C"),
        ("A", "D"),
        ("A", "G"),
        ("A", "H"),
        ("E", "A"),
        ("E", "B"),
        ("E", "D"),
        ("E", "F"),
        ("E", "H"),
    ]);
    let expected: BTreeSet<String> = ["B", "D", "H"].iter().map(|s| s.to_string()).collect();
    assert_eq!(mutual(&graph, "A", "E"), expected);
    assert_eq!(graph.mutual("E", "A"), expected);

    // The graph is untouched by the intersection.
    assert_eq!(graph.adjacent("A").len(), 6);
    assert_eq!(graph.adjacent("E").len(), 5);
}

#[test]
fn test_mutual_missing_person() {
    let graph = with_edges(&[("A", "B"), ("C", "B")]);
    assert!(mutual(&graph, "A", "nobody").is_empty());
    assert!(mutual(&graph, "nobody", "A").is_empty());
    assert_eq!(mutual(&graph, "A", "C").len(), 1);
}

#[test]
fn test_mutual_is_intersection() {
    let graph = random_graph(7, 30, 120);
    for a in graph.all_vertices() {
        for b in graph.all_vertices() {
            let expected: BTreeSet<String> = graph
                .adjacent(&a)
                .intersection(&graph.adjacent(&b))
                .cloned()
                .collect();
            assert_eq!(mutual(&graph, &a, &b), expected);
            assert_eq!(mutual(&graph, &a, &b), mutual(&graph, &b, &a));
        }
    }
}

// ==================== Connection Tests ====================

#[test]
fn test_connection_fixed_tie_breaks() {
    let graph = with_edges(&[
        ("A", "B"),
        ("A", "E"),
        ("A", "G"),
        ("B", "C"),
        ("C", "D"),
        ("C", "F"),
        ("D", "E"),
        ("G", "F"),
        ("G", "H"),
    ]);
    assert_eq!(connection(&graph, "A", "E"), path(&["A", "E"]));
    assert_eq!(connection(&graph, "A", "F"), path(&["A", "G", "F"]));
    assert_eq!(connection(&graph, "C", "G"), path(&["C", "F", "G"]));
    assert_eq!(connection(&graph, "G", "C"), path(&["G", "F", "C"]));
}

#[test]
fn test_connection_complete_graph() {
    let mut graph = with_people();
    for i in 0..PEOPLE.len() {
        for j in i + 1..PEOPLE.len() {
            graph.add_edge(PEOPLE[i], PEOPLE[j]);
        }
    }
    for a in PEOPLE {
        for b in PEOPLE {
            if a != b {
                assert_eq!(connection(&graph, a, b), path(&[a, b]));
            }
        }
    }
}

#[test]
fn test_connection_separate_components() {
    let graph = with_edges(&[
        ("A", "B"),
        ("B", "C"),
        ("C", "D"),
        ("B", "D"),
        ("E", "F"),
        ("F", "G"),
        ("G", "H"),
    ]);
    assert_eq!(connection(&graph, "D", "A"), path(&["D", "B", "A"]));
    assert!(connection(&graph, "A", "H").is_empty());
    assert!(connection(&graph, "B", "E").is_empty());
    assert!(connection(&graph, "C", "G").is_empty());
    assert!(connection(&graph, "D", "F").is_empty());
    assert_eq!(distance(&graph, "A", "D"), Some(2));
    assert_eq!(distance(&graph, "A", "H"), None);
}

#[test]
fn test_connection_is_shortest() {
    for seed in 0..4 {
        let graph = random_graph(100 + seed, 40, 60);
        for a in graph.all_vertices() {
            let hops = hop_counts(&graph, &a);
            for b in graph.all_vertices() {
                let found = connection(&graph, &a, &b);
                match hops.get(&b) {
                    None => assert!(found.is_empty(), "{a} -> {b} should be unreachable"),
                    Some(&d) => {
                        assert_eq!(found.len(), d + 1, "{a} -> {b}");
                        assert_eq!(found.first(), Some(&a));
                        assert_eq!(found.last(), Some(&b));
                        for pair in found.windows(2) {
                            assert!(graph.adjacent(&pair[0]).contains(&pair[1]));
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_connection_is_deterministic() {
    let graph = random_graph(42, 50, 150);
    let copy = graph.clone();
    for a in graph.all_vertices().iter().take(10) {
        for b in graph.all_vertices() {
            assert_eq!(connection(&graph, a, &b), connection(&copy, a, &b));
        }
    }
}
