// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Relationship Graph
//!
//! Weighted relationship graph over a contact snapshot: edges, named
//! clusters, network metrics, path queries and a 2-D layout.

pub mod clusters;
pub mod layout;
pub mod metrics;
pub mod pathfinding;
pub mod relationships;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::contact::{Contact, ContactKind};
use clusters::{identify_clusters, Cluster};
use layout::Position;
use metrics::{compute_metrics, NetworkMetrics};
use relationships::{build_edges, filter_edges};

/// How two contacts are related, by classification priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipType {
    /// Same crew; takes priority over every other classification.
    SameCrew,
    /// Same company and same job.
    SameCompanyJob,
    /// Same company, different job.
    SameCompany,
    /// Same job across companies.
    SameJobDifferentCompany,
    /// Only title, shift or contact kind in common.
    SharedAttributes,
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::SameCrew => "same-crew",
            RelationshipType::SameCompanyJob => "same-company-job",
            RelationshipType::SameCompany => "same-company",
            RelationshipType::SameJobDifferentCompany => "same-job-different-company",
            RelationshipType::SharedAttributes => "shared-attributes",
        }
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contact as a graph vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub company: String,
    pub job: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew: Option<String>,
    pub kind: ContactKind,
    /// Degree.
    pub connection_count: usize,
    /// Sum of incident edge strengths.
    pub centrality_score: f64,
}

impl GraphNode {
    /// Creates a node with zeroed metrics.
    pub fn from_contact(contact: &Contact) -> Self {
        GraphNode {
            id: contact.id().to_string(),
            name: contact.name().to_string(),
            company: contact.company().to_string(),
            job: contact.job().to_string(),
            crew: contact.crew().map(str::to_string),
            kind: contact.kind().clone(),
            connection_count: 0,
            centrality_score: 0.0,
        }
    }
}

/// An undirected weighted relationship between two contacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Accumulated strength, capped at 10.
    pub strength: f64,
    pub relationship_type: RelationshipType,
    pub details: String,
    pub shared_attributes: Vec<String>,
}

impl GraphEdge {
    /// Returns true if the edge touches the given contact.
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }

    /// Returns the endpoint opposite `id`, if the edge touches it.
    pub fn other_end(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(&self.target)
        } else if self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }
}

/// The full dashboard view of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub clusters: Vec<Cluster>,
    pub metrics: NetworkMetrics,
}

impl RelationshipGraph {
    /// Builds edges, clusters, nodes and metrics for the snapshot.
    ///
    /// Edges below `config.min_edge_strength` are dropped before metrics are
    /// computed.
    pub fn build(contacts: &[Contact], config: &EngineConfig) -> Self {
        let edges = filter_edges(build_edges(contacts), config.min_edge_strength);
        let clusters = identify_clusters(contacts);
        let mut nodes: Vec<GraphNode> = contacts.iter().map(GraphNode::from_contact).collect();
        let metrics = compute_metrics(&mut nodes, &edges, &clusters);

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            clusters = clusters.len(),
            "relationship graph built"
        );

        RelationshipGraph {
            nodes,
            edges,
            clusters,
            metrics,
        }
    }

    /// Lays the graph out on the configured canvas.
    pub fn positions(&self, config: &EngineConfig) -> BTreeMap<String, Position> {
        layout::layout(
            &self.nodes,
            &self.edges,
            config.canvas_width,
            config.canvas_height,
            config.layout_iterations,
        )
    }

    /// Shortest path by edge count between two contacts.
    pub fn path(&self, from: &str, to: &str) -> Vec<GraphEdge> {
        pathfinding::find_path(from, to, &self.edges)
    }

    /// Strongly connected neighbors of a contact, most central first.
    pub fn influencers(&self, contact_id: &str) -> Vec<GraphNode> {
        pathfinding::get_influencers(contact_id, &self.nodes, &self.edges)
    }

    /// Looks up a node by contact ID.
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
