// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Weighted multi-field comparison of two contacts.
//!
//! Each field contributes to a running score and a running weight only when
//! it applies. Weights and thresholds are fixed policy values.

use serde::{Deserialize, Serialize};

use super::similarity::string_similarity;
use super::{present, Contact};

const NAME_THRESHOLD: f64 = 0.8;
const ORG_THRESHOLD: f64 = 0.9;
const CREW_THRESHOLD: f64 = 0.9;
const TITLE_REASON_THRESHOLD: f64 = 0.8;

const NAME_STRONG_WEIGHT: f64 = 3.0;
const NAME_WEAK_WEIGHT: f64 = 1.0;
const EMAIL_WEIGHT: f64 = 5.0;
const PHONE_WEIGHT: f64 = 5.0;
const ORG_STRONG_WEIGHT: f64 = 2.0;
const ORG_WEAK_WEIGHT: f64 = 1.0;
const TITLE_WEIGHT: f64 = 0.5;
const CREW_STRONG_WEIGHT: f64 = 1.0;
const CREW_WEAK_WEIGHT: f64 = 0.5;

/// Similarity between two contacts, with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityScore {
    /// ID of the first contact.
    pub id1: String,
    /// ID of the second contact.
    pub id2: String,
    /// Similarity score (0.0 to 1.0).
    pub similarity: f64,
    /// Human-readable matched evidence.
    pub reasons: Vec<String>,
}

#[derive(Default)]
struct Evidence {
    score: f64,
    weight: f64,
    reasons: Vec<String>,
}

impl Evidence {
    fn add(&mut self, sim: f64, weight: f64) {
        self.score += sim * weight;
        self.weight += weight;
    }

    fn finish(self) -> (f64, Vec<String>) {
        if self.weight == 0.0 {
            return (0.0, self.reasons);
        }
        ((self.score / self.weight).min(1.0), self.reasons)
    }
}

fn percent(sim: f64) -> i64 {
    (sim * 100.0).round() as i64
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Company and job share one rule: strong weight above 0.9, weak otherwise.
fn org_field(evidence: &mut Evidence, a: &str, b: &str, reason: &str) {
    if let (Some(a), Some(b)) = (present(Some(a)), present(Some(b))) {
        let sim = string_similarity(a, b);
        if sim > ORG_THRESHOLD {
            evidence.add(sim, ORG_STRONG_WEIGHT);
            evidence.reasons.push(reason.to_string());
        } else {
            evidence.add(sim, ORG_WEAK_WEIGHT);
        }
    }
}

/// Compares two contacts field by field.
///
/// The result is symmetric in its score and always within `[0, 1]`.
pub fn compare_contacts(c1: &Contact, c2: &Contact) -> SimilarityScore {
    let mut evidence = Evidence::default();

    let name_sim = string_similarity(c1.name(), c2.name());
    if name_sim > NAME_THRESHOLD {
        evidence.add(name_sim, NAME_STRONG_WEIGHT);
        evidence
            .reasons
            .push(format!("Similar names ({}%)", percent(name_sim)));
    } else {
        evidence.add(name_sim, NAME_WEAK_WEIGHT);
    }

    if let (Some(a), Some(b)) = (present(c1.email()), present(c2.email())) {
        evidence.weight += EMAIL_WEIGHT;
        if normalize_email(a) == normalize_email(b) {
            evidence.score += EMAIL_WEIGHT;
            evidence.reasons.push("Same email address".to_string());
        }
    }

    if let (Some(a), Some(b)) = (present(c1.phone()), present(c2.phone())) {
        evidence.weight += PHONE_WEIGHT;
        let (a, b) = (normalize_phone(a), normalize_phone(b));
        if !a.is_empty() && a == b {
            evidence.score += PHONE_WEIGHT;
            evidence.reasons.push("Same phone number".to_string());
        }
    }

    org_field(&mut evidence, c1.company(), c2.company(), "Same company");
    org_field(&mut evidence, c1.job(), c2.job(), "Same job");

    if let (Some(a), Some(b)) = (present(c1.title()), present(c2.title())) {
        let sim = string_similarity(a, b);
        evidence.add(sim, TITLE_WEIGHT);
        if sim > TITLE_REASON_THRESHOLD {
            evidence
                .reasons
                .push(format!("Similar titles ({}%)", percent(sim)));
        }
    }

    if let (Some(a), Some(b)) = (present(c1.crew()), present(c2.crew())) {
        let sim = string_similarity(a, b);
        if sim > CREW_THRESHOLD {
            evidence.add(sim, CREW_STRONG_WEIGHT);
            evidence.reasons.push("Same crew".to_string());
        } else {
            evidence.add(sim, CREW_WEAK_WEIGHT);
        }
    }

    let (similarity, reasons) = evidence.finish();
    SimilarityScore {
        id1: c1.id().to_string(),
        id2: c2.id().to_string(),
        similarity,
        reasons,
    }
}
