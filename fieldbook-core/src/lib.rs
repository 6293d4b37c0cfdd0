// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fieldbook Core Library
//!
//! Duplicate detection and relationship graph engine for a field-operations
//! contact directory. Every operation is a pure function of the contact
//! snapshot it is given; nothing here owns persistent state.

pub mod config;
pub mod contact;
pub mod error;
pub mod graph;

pub use config::{EngineConfig, THRESHOLD_PRESETS};
pub use contact::compare::{compare_contacts, SimilarityScore};
pub use contact::duplicates::{
    find_duplicate_groups, find_duplicates_of, DuplicateGroup, DEFAULT_DUPLICATE_THRESHOLD,
};
pub use contact::merge::{suggest_merge, suggest_merge_for_group, MergedContact};
pub use contact::similarity::string_similarity;
pub use contact::{Contact, ContactBuilder, ContactKind};
pub use error::{EngineError, EngineResult};
pub use graph::clusters::{identify_clusters, Cluster, ClusterType};
pub use graph::layout::{layout, Position, DEFAULT_ITERATIONS};
pub use graph::metrics::{compute_metrics, NetworkMetrics};
pub use graph::pathfinding::{find_path, get_influencers, INFLUENCER_MIN_STRENGTH};
pub use graph::relationships::{build_edges, filter_edges, MAX_STRENGTH};
pub use graph::{GraphEdge, GraphNode, RelationshipGraph, RelationshipType};
