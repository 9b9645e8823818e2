//! Structural queries: components, mutual friends, shortest connection.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use super::SocialGraph;

/// Number of connected components.
///
/// Flood fill with an explicit stack from every unvisited name, so deep
/// chains cannot overflow the call stack.
pub fn components(graph: &SocialGraph) -> usize {
    let mut visited: HashSet<&str> = HashSet::with_capacity(graph.order());
    let mut stack: Vec<&str> = Vec::new();
    let mut count = 0;

    for seed in graph.names() {
        if !visited.insert(seed) {
            continue;
        }
        count += 1;
        stack.push(seed);
        while let Some(current) = stack.pop() {
            for friend in graph.neighbors(current) {
                if visited.insert(friend) {
                    stack.push(friend);
                }
            }
        }
    }

    count
}

/// Friends shared by `a` and `b`. Empty if either is absent.
pub fn mutual(graph: &SocialGraph, a: &str, b: &str) -> BTreeSet<String> {
    let (Some(pa), Some(pb)) = (graph.person(a), graph.person(b)) else {
        return BTreeSet::new();
    };
    pa.friends.intersection(&pb.friends).cloned().collect()
}

/// Shortest path from `a` to `b` by edge count, both endpoints included.
///
/// Breadth-first from `a`. Friends are visited in lexicographic order and a
/// predecessor is only replaced by a strictly shorter distance, so among
/// equally short paths the one discovered first wins. Returns an empty path
/// when `a` is absent or `b` is unreachable; `[a]` when `a == b`.
pub fn connection(graph: &SocialGraph, a: &str, b: &str) -> Vec<String> {
    if !graph.contains(a) {
        return Vec::new();
    }

    let mut queue: VecDeque<&str> = VecDeque::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut distance: HashMap<&str, u32> = HashMap::new();
    let mut predecessor: HashMap<&str, &str> = HashMap::new();

    queue.push_back(a);
    visited.insert(a);
    distance.insert(a, 0);

    while let Some(current) = queue.pop_front() {
        let next = distance[current] + 1;
        for friend in graph.neighbors(current) {
            if visited.insert(friend) {
                queue.push_back(friend);
            }
            if next < distance.get(friend).copied().unwrap_or(u32::MAX) {
                distance.insert(friend, next);
                predecessor.insert(friend, current);
            }
        }
    }

    if !visited.contains(b) {
        return Vec::new();
    }

    let mut path = vec![b.to_string()];
    let mut current = b;
    while let Some(&prev) = predecessor.get(current) {
        path.push(prev.to_string());
        current = prev;
    }
    path.reverse();
    path
}

/// Number of hops between `a` and `b`, `None` if they are not connected.
pub fn distance(graph: &SocialGraph, a: &str, b: &str) -> Option<usize> {
    let path = connection(graph, a, b);
    (!path.is_empty()).then(|| path.len() - 1)
}
