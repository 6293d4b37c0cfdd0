// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Fixtures
//!
//! A small frac-site directory used across suites.

use fieldbook_core::{Contact, ContactKind};

/// Contact with only name, company and job set.
pub fn basic(id: &str, name: &str, company: &str, job: &str) -> Contact {
    Contact::new(id, name, company, job)
}

/// Contact with name and email, updated at `ts`.
pub fn with_email(id: &str, name: &str, email: &str, ts: u64) -> Contact {
    Contact::builder(id, name).email(email).last_updated(ts).build()
}

/// Six contacts over two companies, two jobs and one crew.
///
/// - a1, a2: Halcyon / Pad 7 / Red crew / day shift
/// - a3: Halcyon / Pad 9
/// - b1: Borealis / Pad 7 (frac)
/// - b2: Borealis / Pad 12 (frac)
/// - c1: loner with nothing in common except kind with a1..a3
pub fn site_directory() -> Vec<Contact> {
    vec![
        Contact::builder("a1", "Dana Ruiz")
            .company("Halcyon")
            .job("Pad 7")
            .crew("Red")
            .shift("Day")
            .title("Supervisor")
            .last_updated(100)
            .build(),
        Contact::builder("a2", "Lee Park")
            .company("Halcyon")
            .job("Pad 7")
            .crew("Red")
            .shift("Day")
            .title("Operator")
            .last_updated(200)
            .build(),
        Contact::builder("a3", "Sam Ortiz")
            .company("Halcyon")
            .job("Pad 9")
            .last_updated(300)
            .build(),
        Contact::builder("b1", "Kim Vo")
            .company("Borealis")
            .job("Pad 7")
            .kind(ContactKind::Frac)
            .last_updated(400)
            .build(),
        Contact::builder("b2", "Ari Moss")
            .company("Borealis")
            .job("Pad 12")
            .kind(ContactKind::Frac)
            .last_updated(500)
            .build(),
        Contact::builder("c1", "Jo Hale")
            .kind(ContactKind::Custom("Wireline".to_string()))
            .last_updated(600)
            .build(),
    ]
}
