// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Module
//!
//! The contact record consumed by the engine, plus duplicate detection and
//! merge suggestion over a contact snapshot.
//!
//! Client, frac and custom-type contacts share one record shape with
//! optional fields; `ContactKind` tells them apart.

pub mod compare;
pub mod duplicates;
pub mod merge;
pub mod similarity;

use serde::{Deserialize, Serialize};

/// The directory a contact was entered into.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// Customer-side contact.
    #[default]
    Client,
    /// Frac crew contact.
    Frac,
    /// User-defined contact type.
    Custom(String),
}

impl ContactKind {
    /// Returns a comparison key: `client`, `frac`, or `custom:<type>`.
    pub fn normalized(&self) -> String {
        match self {
            ContactKind::Client => "client".to_string(),
            ContactKind::Frac => "frac".to_string(),
            ContactKind::Custom(name) => format!("custom:{}", name.trim().to_lowercase()),
        }
    }

    /// Returns a human-readable label.
    pub fn label(&self) -> &str {
        match self {
            ContactKind::Client => "Client",
            ContactKind::Frac => "Frac",
            ContactKind::Custom(name) => name,
        }
    }
}

/// A directory contact.
///
/// Immutable input to every engine operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Stable unique identifier
    id: String,
    /// Full name
    name: String,
    /// Employer
    #[serde(default)]
    company: String,
    /// Job or well site the contact works on
    #[serde(default)]
    job: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    crew: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shift: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    /// Unix timestamp of the last edit
    #[serde(default)]
    last_updated: u64,
    #[serde(default)]
    kind: ContactKind,
}

impl Contact {
    /// Creates a contact with only the required fields set.
    pub fn new(id: &str, name: &str, company: &str, job: &str) -> Self {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            company: company.to_string(),
            job: job.to_string(),
            title: None,
            crew: None,
            shift: None,
            email: None,
            phone: None,
            notes: None,
            last_updated: 0,
            kind: ContactKind::Client,
        }
    }

    /// Starts a builder for a contact with the given id and name.
    pub fn builder(id: &str, name: &str) -> ContactBuilder {
        ContactBuilder::new(id, name)
    }

    /// Parses a JSON array of contacts.
    pub fn parse_snapshot(json: &str) -> crate::EngineResult<Vec<Contact>> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn job(&self) -> &str {
        &self.job
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn crew(&self) -> Option<&str> {
        self.crew.as_deref()
    }

    pub fn shift(&self) -> Option<&str> {
        self.shift.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the Unix timestamp of the last edit.
    pub fn last_updated(&self) -> u64 {
        self.last_updated
    }

    pub fn kind(&self) -> &ContactKind {
        &self.kind
    }
}

/// Builder for [`Contact`].
#[derive(Clone, Debug)]
pub struct ContactBuilder {
    contact: Contact,
}

impl ContactBuilder {
    /// Creates a builder with empty company and job.
    pub fn new(id: &str, name: &str) -> Self {
        ContactBuilder {
            contact: Contact::new(id, name, "", ""),
        }
    }

    pub fn company(mut self, company: &str) -> Self {
        self.contact.company = company.to_string();
        self
    }

    pub fn job(mut self, job: &str) -> Self {
        self.contact.job = job.to_string();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.contact.title = Some(title.to_string());
        self
    }

    pub fn crew(mut self, crew: &str) -> Self {
        self.contact.crew = Some(crew.to_string());
        self
    }

    pub fn shift(mut self, shift: &str) -> Self {
        self.contact.shift = Some(shift.to_string());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.contact.email = Some(email.to_string());
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.contact.phone = Some(phone.to_string());
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.contact.notes = Some(notes.to_string());
        self
    }

    pub fn last_updated(mut self, timestamp: u64) -> Self {
        self.contact.last_updated = timestamp;
        self
    }

    pub fn kind(mut self, kind: ContactKind) -> Self {
        self.contact.kind = kind;
        self
    }

    pub fn build(self) -> Contact {
        self.contact
    }
}

/// Returns the trimmed value if it is non-empty.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Case-insensitive, trimmed equality of two present values.
pub(crate) fn same_value(a: Option<&str>, b: Option<&str>) -> bool {
    match (present(a), present(b)) {
        (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
        _ => false,
    }
}
