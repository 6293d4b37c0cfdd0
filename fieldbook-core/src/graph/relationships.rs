// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Relationship Edges
//!
//! Every contact pair accumulates strength from independent signals. The
//! relationship type is assigned by priority, not by the largest
//! contribution: crew beats company+job, which beats company, which beats job.

use tracing::debug;

use super::{GraphEdge, RelationshipType};
use crate::contact::{same_value, Contact};

/// Upper bound on edge strength.
pub const MAX_STRENGTH: f64 = 10.0;

const SAME_COMPANY_JOB: f64 = 5.0;
const SAME_COMPANY: f64 = 3.0;
const SAME_JOB: f64 = 2.0;
const SAME_CREW: f64 = 4.0;
const SAME_TITLE: f64 = 1.0;
const SAME_SHIFT: f64 = 1.0;
const SAME_KIND: f64 = 0.5;

/// Scores one pair. Returns `None` when nothing is shared.
fn relate(a: &Contact, b: &Contact) -> Option<GraphEdge> {
    let mut strength = 0.0;
    let mut relationship = RelationshipType::SharedAttributes;
    let mut shared = Vec::new();
    let mut details = Vec::new();

    let same_company = same_value(Some(a.company()), Some(b.company()));
    let same_job = same_value(Some(a.job()), Some(b.job()));

    if same_company && same_job {
        strength += SAME_COMPANY_JOB;
        relationship = RelationshipType::SameCompanyJob;
        shared.extend(["company", "job"]);
        details.push(format!("Same company and job ({}, {})", a.company(), a.job()));
    } else if same_company {
        strength += SAME_COMPANY;
        relationship = RelationshipType::SameCompany;
        shared.push("company");
        details.push(format!("Same company ({})", a.company()));
    } else if same_job {
        strength += SAME_JOB;
        relationship = RelationshipType::SameJobDifferentCompany;
        shared.push("job");
        details.push(format!("Same job across companies ({})", a.job()));
    }

    if same_value(a.crew(), b.crew()) {
        strength += SAME_CREW;
        relationship = RelationshipType::SameCrew;
        shared.push("crew");
        details.push(format!("Same crew ({})", a.crew().unwrap_or_default()));
    }

    if same_value(a.title(), b.title()) {
        strength += SAME_TITLE;
        shared.push("title");
        details.push(format!("Same title ({})", a.title().unwrap_or_default()));
    }

    if same_value(a.shift(), b.shift()) {
        strength += SAME_SHIFT;
        shared.push("shift");
        details.push(format!("Same shift ({})", a.shift().unwrap_or_default()));
    }

    if a.kind().normalized() == b.kind().normalized() {
        strength += SAME_KIND;
        shared.push("kind");
        details.push(format!("Both {} contacts", a.kind().label()));
    }

    if strength <= 0.0 {
        return None;
    }

    Some(GraphEdge {
        id: format!("edge-{}-{}", a.id(), b.id()),
        source: a.id().to_string(),
        target: b.id().to_string(),
        strength: strength.min(MAX_STRENGTH),
        relationship_type: relationship,
        details: details.join("; "),
        shared_attributes: shared.into_iter().map(str::to_string).collect(),
    })
}

/// Builds relationship edges for every contact pair.
///
/// The earlier contact in input order is the edge source. O(n²).
pub fn build_edges(contacts: &[Contact]) -> Vec<GraphEdge> {
    let mut edges = Vec::new();

    for i in 0..contacts.len() {
        for j in (i + 1)..contacts.len() {
            if let Some(edge) = relate(&contacts[i], &contacts[j]) {
                edges.push(edge);
            }
        }
    }

    debug!(
        contacts = contacts.len(),
        edges = edges.len(),
        "relationship edges built"
    );
    edges
}

/// Keeps edges whose strength is at least `min_strength`.
pub fn filter_edges(edges: Vec<GraphEdge>, min_strength: f64) -> Vec<GraphEdge> {
    edges
        .into_iter()
        .filter(|e| e.strength >= min_strength)
        .collect()
}
