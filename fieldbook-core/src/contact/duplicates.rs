// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Duplicate Detection
//!
//! Groups probable duplicates with a single greedy pass over the snapshot.
//! Grouping is not transitive: a contact is only absorbed by the
//! first earlier, unclaimed contact it matches directly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::compare::{compare_contacts, SimilarityScore};
use super::Contact;

/// Default minimum similarity for two contacts to be grouped.
pub const DEFAULT_DUPLICATE_THRESHOLD: f64 = 0.8;

/// A set of contacts judged to be the same person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateGroup {
    /// Stable group identifier, derived from the contact that opened the group.
    pub id: String,
    /// Member IDs, most recently updated first.
    pub contact_ids: Vec<String>,
    /// Mean of all pairwise similarity scores inside the group.
    pub similarity: f64,
    /// Union of matched evidence, in first-seen order.
    pub reasons: Vec<String>,
}

impl DuplicateGroup {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.contact_ids.len()
    }

    /// Groups always hold at least two members once formed.
    pub fn is_empty(&self) -> bool {
        self.contact_ids.is_empty()
    }

    /// Returns true if the contact belongs to this group.
    pub fn contains(&self, contact_id: &str) -> bool {
        self.contact_ids.iter().any(|id| id == contact_id)
    }
}

fn push_unique(reasons: &mut Vec<String>, new: &[String]) {
    for reason in new {
        if !reasons.contains(reason) {
            reasons.push(reason.clone());
        }
    }
}

/// Mean comparator score over every unordered pair of members.
fn mean_pairwise_similarity(members: &[&Contact]) -> f64 {
    let mut total = 0.0;
    let mut pairs = 0usize;

    for i in 0..members.len() {
        for j in (i + 1)..members.len() {
            total += compare_contacts(members[i], members[j]).similarity;
            pairs += 1;
        }
    }

    if pairs == 0 {
        return 0.0;
    }
    total / pairs as f64
}

/// Finds duplicate groups in the snapshot.
///
/// Contacts are scanned in input order. Each unclaimed contact is compared to
/// every later unclaimed contact; all matches at or above `threshold` join it
/// in a new group and are claimed. Groups are returned sorted by descending
/// mean similarity.
pub fn find_duplicate_groups(contacts: &[Contact], threshold: f64) -> Vec<DuplicateGroup> {
    let mut claimed = vec![false; contacts.len()];
    let mut groups = Vec::new();

    for i in 0..contacts.len() {
        if claimed[i] {
            continue;
        }

        let mut member_indices = vec![i];
        let mut reasons = Vec::new();

        for j in (i + 1)..contacts.len() {
            if claimed[j] {
                continue;
            }
            let score = compare_contacts(&contacts[i], &contacts[j]);
            if score.similarity >= threshold {
                member_indices.push(j);
                push_unique(&mut reasons, &score.reasons);
            }
        }

        if member_indices.len() < 2 {
            continue;
        }

        for &idx in &member_indices {
            claimed[idx] = true;
        }

        let mut members: Vec<&Contact> = member_indices.iter().map(|&idx| &contacts[idx]).collect();
        let similarity = mean_pairwise_similarity(&members);
        members.sort_by(|a, b| b.last_updated().cmp(&a.last_updated()));

        groups.push(DuplicateGroup {
            id: format!("dup-{}", contacts[i].id()),
            contact_ids: members.iter().map(|c| c.id().to_string()).collect(),
            similarity,
            reasons,
        });
    }

    groups.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        contacts = contacts.len(),
        groups = groups.len(),
        threshold,
        "duplicate scan complete"
    );
    groups
}

/// Checks one contact against the directory.
///
/// Entries sharing the candidate's ID are skipped. Returns every match at or
/// above `threshold`, best first.
pub fn find_duplicates_of(
    candidate: &Contact,
    contacts: &[Contact],
    threshold: f64,
) -> Vec<SimilarityScore> {
    let mut matches: Vec<SimilarityScore> = contacts
        .iter()
        .filter(|c| c.id() != candidate.id())
        .map(|c| compare_contacts(candidate, c))
        .filter(|score| score.similarity >= threshold)
        .collect();

    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches
}
