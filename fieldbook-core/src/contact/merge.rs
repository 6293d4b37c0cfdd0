// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Merge Suggestion
//!
//! Synthesizes one record from a duplicate group. The most recently updated
//! member is the base; its empty fields are filled from the other members in
//! group order, and once a field is filled it is never overwritten.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::duplicates::DuplicateGroup;
use super::{present, Contact};
use crate::error::{EngineError, EngineResult};

/// Separator placed between distinct notes of merged members.
pub const NOTES_SEPARATOR: &str = "\n---\n";

/// A suggested merged record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedContact {
    /// The synthesized contact, carrying the base member's ID.
    pub contact: Contact,
    /// ID of the member chosen as base.
    pub base_id: String,
    /// IDs of the other members folded into the base.
    pub merged_ids: Vec<String>,
}

fn fill_text(target: &mut String, source: &str) {
    if target.trim().is_empty() && !source.trim().is_empty() {
        *target = source.to_string();
    }
}

fn fill_optional(target: &mut Option<String>, source: Option<&str>) {
    if present(target.as_deref()).is_none() {
        if let Some(value) = source.filter(|v| !v.trim().is_empty()) {
            *target = Some(value.to_string());
        }
    }
}

/// Builds a merged record from the given members.
///
/// Returns [`EngineError::EmptyGroup`] when `contacts` is empty.
pub fn suggest_merge(contacts: &[Contact]) -> EngineResult<MergedContact> {
    let base_index = contacts
        .iter()
        .enumerate()
        .fold(None, |best: Option<usize>, (idx, c)| match best {
            Some(b) if contacts[b].last_updated() >= c.last_updated() => Some(b),
            _ => Some(idx),
        })
        .ok_or(EngineError::EmptyGroup)?;

    let mut merged = contacts[base_index].clone();
    let mut merged_ids = Vec::new();

    for (idx, other) in contacts.iter().enumerate() {
        if idx == base_index {
            continue;
        }
        merged_ids.push(other.id().to_string());

        fill_text(&mut merged.name, other.name());
        fill_text(&mut merged.company, other.company());
        fill_text(&mut merged.job, other.job());
        fill_optional(&mut merged.title, other.title());
        fill_optional(&mut merged.crew, other.crew());
        fill_optional(&mut merged.shift, other.shift());
        fill_optional(&mut merged.email, other.email());
        fill_optional(&mut merged.phone, other.phone());
    }

    let mut notes: Vec<&str> = Vec::new();
    let ordered = std::iter::once(&contacts[base_index]).chain(
        contacts
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != base_index)
            .map(|(_, c)| c),
    );
    for contact in ordered {
        if let Some(note) = contact.notes() {
            if !note.trim().is_empty() && !notes.contains(&note) {
                notes.push(note);
            }
        }
    }
    match notes.len() {
        0 => {}
        1 => merged.notes = Some(notes[0].to_string()),
        _ => merged.notes = Some(notes.join(NOTES_SEPARATOR)),
    }

    debug!(
        base = merged.id(),
        absorbed = merged_ids.len(),
        "merge suggestion built"
    );

    Ok(MergedContact {
        base_id: merged.id().to_string(),
        contact: merged,
        merged_ids,
    })
}

/// Resolves a group's members against the snapshot and merges them.
pub fn suggest_merge_for_group(
    group: &DuplicateGroup,
    contacts: &[Contact],
) -> EngineResult<MergedContact> {
    let members = group
        .contact_ids
        .iter()
        .map(|id| {
            contacts
                .iter()
                .find(|c| c.id() == id)
                .cloned()
                .ok_or_else(|| EngineError::ContactNotFound(id.clone()))
        })
        .collect::<EngineResult<Vec<Contact>>>()?;

    suggest_merge(&members)
}
