// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Named Clusters
//!
//! Visual groupings by company, by job shared across companies, and by
//! (company, crew). Unrelated to duplicate detection.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::contact::{present, Contact};

/// Display colors assigned to clusters by key hash.
pub const PALETTE: &[&str] = &[
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
    "#6366f1", "#84cc16",
];

/// What a cluster groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterType {
    Company,
    Job,
    Crew,
}

/// A named group of at least two contacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub cluster_type: ClusterType,
    pub members: Vec<String>,
    pub color: String,
    /// Member count.
    pub strength: usize,
}

/// Picks a palette color for a key. Stable per key, not unique.
pub fn cluster_color(key: &str) -> &'static str {
    let hash = key
        .bytes()
        .fold(5381u32, |h, b| h.wrapping_mul(33).wrapping_add(b as u32));
    PALETTE[hash as usize % PALETTE.len()]
}

/// Contacts bucketed by key, in first-appearance order.
struct Buckets<'a, K> {
    order: Vec<K>,
    members: HashMap<K, Vec<&'a Contact>>,
}

impl<'a, K: Clone + Eq + Hash> Buckets<'a, K> {
    fn new() -> Self {
        Buckets {
            order: Vec::new(),
            members: HashMap::new(),
        }
    }

    fn insert(&mut self, key: K, contact: &'a Contact) {
        if !self.members.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.members.entry(key).or_default().push(contact);
    }

    fn iter(&self) -> impl Iterator<Item = (&K, &[&'a Contact])> {
        self.order
            .iter()
            .map(|key| (key, self.members[key].as_slice()))
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn make_cluster(id: String, name: String, cluster_type: ClusterType, members: &[&Contact]) -> Cluster {
    Cluster {
        color: cluster_color(&id).to_string(),
        id,
        name,
        cluster_type,
        members: members.iter().map(|c| c.id().to_string()).collect(),
        strength: members.len(),
    }
}

/// Derives company, cross-company job, and crew clusters.
pub fn identify_clusters(contacts: &[Contact]) -> Vec<Cluster> {
    let mut companies = Buckets::new();
    let mut jobs = Buckets::new();
    let mut crews = Buckets::new();

    for contact in contacts {
        if let Some(company) = present(Some(contact.company())) {
            companies.insert(normalize(company), contact);
        }
        if let Some(job) = present(Some(contact.job())) {
            jobs.insert(normalize(job), contact);
        }
        if let Some(crew) = present(contact.crew()) {
            crews.insert((normalize(contact.company()), normalize(crew)), contact);
        }
    }

    let mut clusters = Vec::new();

    for (key, members) in companies.iter() {
        if members.len() >= 2 {
            clusters.push(make_cluster(
                format!("company-{}", key),
                members[0].company().trim().to_string(),
                ClusterType::Company,
                members,
            ));
        }
    }

    // Single-company jobs are already covered by the company cluster.
    for (key, members) in jobs.iter() {
        let distinct_companies: HashSet<String> =
            members.iter().map(|c| normalize(c.company())).collect();
        if members.len() >= 2 && distinct_companies.len() > 1 {
            clusters.push(make_cluster(
                format!("job-{}", key),
                members[0].job().trim().to_string(),
                ClusterType::Job,
                members,
            ));
        }
    }

    // Keyed on the pair so hyphens inside names cannot join two crews.
    for ((company_key, crew_key), members) in crews.iter() {
        if members.len() >= 2 {
            let first = members[0];
            let crew = first.crew().unwrap_or_default().trim();
            let name = match present(Some(first.company())) {
                Some(company) => format!("{} ({})", crew, company),
                None => crew.to_string(),
            };
            clusters.push(make_cluster(
                format!("crew-{}-{}", company_key, crew_key),
                name,
                ClusterType::Crew,
                members,
            ));
        }
    }

    clusters
}
