// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network Metrics

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::clusters::{Cluster, ClusterType};
use super::{GraphEdge, GraphNode};

/// Aggregate statistics over a relationship graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMetrics {
    pub total_contacts: usize,
    pub total_connections: usize,
    /// Sum of degrees over `2n`, i.e. connections per contact.
    pub average_connections: f64,
    /// `2|E| / (n(n-1))`, 0 for graphs of one node or fewer.
    pub network_density: f64,
    pub largest_cluster_size: usize,
    /// Nodes without any edge.
    pub isolated_contacts: usize,
    pub company_clusters: usize,
    pub job_clusters: usize,
    pub crew_clusters: usize,
}

/// Recomputes node degree and centrality, then derives network metrics.
///
/// Existing `connection_count` and `centrality_score` values are discarded.
/// Edges naming an unknown node are ignored.
pub fn compute_metrics(
    nodes: &mut [GraphNode],
    edges: &[GraphEdge],
    clusters: &[Cluster],
) -> NetworkMetrics {
    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();

    let mut degree = vec![0usize; nodes.len()];
    let mut centrality = vec![0.0f64; nodes.len()];
    let mut connections = 0usize;

    for edge in edges {
        let (Some(&s), Some(&t)) = (
            index.get(edge.source.as_str()),
            index.get(edge.target.as_str()),
        ) else {
            continue;
        };
        degree[s] += 1;
        degree[t] += 1;
        centrality[s] += edge.strength;
        centrality[t] += edge.strength;
        connections += 1;
    }

    for (i, node) in nodes.iter_mut().enumerate() {
        node.connection_count = degree[i];
        node.centrality_score = centrality[i];
    }

    let n = nodes.len();
    let average_connections = if n == 0 {
        0.0
    } else {
        degree.iter().sum::<usize>() as f64 / (2 * n) as f64
    };
    let network_density = if n <= 1 {
        0.0
    } else {
        (2 * connections) as f64 / (n * (n - 1)) as f64
    };

    let count_type = |t: ClusterType| clusters.iter().filter(|c| c.cluster_type == t).count();

    NetworkMetrics {
        total_contacts: n,
        total_connections: connections,
        average_connections,
        network_density,
        largest_cluster_size: clusters.iter().map(|c| c.strength).max().unwrap_or(0),
        isolated_contacts: degree.iter().filter(|&&d| d == 0).count(),
        company_clusters: count_type(ClusterType::Company),
        job_clusters: count_type(ClusterType::Job),
        crew_clusters: count_type(ClusterType::Crew),
    }
}
