// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path and influencer queries over the undirected edge list.

use std::collections::{HashMap, HashSet, VecDeque};

use super::{GraphEdge, GraphNode};

/// Minimum edge strength for a neighbor to count as an influencer.
pub const INFLUENCER_MIN_STRENGTH: f64 = 3.0;

/// Neighbor lists in edge-list order: node -> [(neighbor, edge index)].
fn adjacency(edges: &[GraphEdge]) -> HashMap<&str, Vec<(&str, usize)>> {
    let mut adj: HashMap<&str, Vec<(&str, usize)>> = HashMap::new();
    for (idx, edge) in edges.iter().enumerate() {
        adj.entry(edge.source.as_str())
            .or_default()
            .push((edge.target.as_str(), idx));
        adj.entry(edge.target.as_str())
            .or_default()
            .push((edge.source.as_str(), idx));
    }
    adj
}

/// Shortest path by edge count, via breadth-first search.
///
/// Returns the edges along the first shortest path found, ordered from
/// `from` to `to`. Empty when unreachable or when `from == to`.
pub fn find_path(from: &str, to: &str, edges: &[GraphEdge]) -> Vec<GraphEdge> {
    if from == to {
        return Vec::new();
    }

    let adj = adjacency(edges);
    if !adj.contains_key(from) {
        return Vec::new();
    }

    // node -> (predecessor, edge index used to reach it)
    let mut came_from: HashMap<&str, (&str, usize)> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);

    while let Some(current) = queue.pop_front() {
        if current == to {
            break;
        }
        for &(next, edge_idx) in adj.get(current).into_iter().flatten() {
            if visited.insert(next) {
                came_from.insert(next, (current, edge_idx));
                queue.push_back(next);
            }
        }
    }

    let mut path = Vec::new();
    let mut node = to;
    while let Some(&(prev, edge_idx)) = came_from.get(node) {
        path.push(edges[edge_idx].clone());
        node = prev;
    }
    if node != from {
        return Vec::new();
    }

    path.reverse();
    path
}

/// Neighbors joined to `contact_id` by an edge of strength at least
/// [`INFLUENCER_MIN_STRENGTH`], most central first.
///
/// This is a local notion of influence: only direct neighbors are considered.
pub fn get_influencers(contact_id: &str, nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<GraphNode> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut influencers: Vec<GraphNode> = edges
        .iter()
        .filter(|e| e.strength >= INFLUENCER_MIN_STRENGTH)
        .filter_map(|e| e.other_end(contact_id))
        .filter(|id| seen.insert(*id))
        .filter_map(|id| nodes.iter().find(|n| n.id == id))
        .cloned()
        .collect();

    influencers.sort_by(|a, b| {
        b.centrality_score
            .partial_cmp(&a.centrality_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    influencers
}
