// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable strategies for property-based tests.

use proptest::prelude::*;

use fieldbook_core::{Contact, ContactKind};

/// Strategy for short field values, including blanks and non-ASCII.
pub fn field_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z ]{1,12}",
        "[a-zé ñü]{1,8}",
    ]
}

/// Strategy for optional field values.
pub fn optional_value_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[A-Za-z]{1,6}")
}

/// Strategy for contact kinds.
pub fn kind_strategy() -> impl Strategy<Value = ContactKind> {
    prop_oneof![
        Just(ContactKind::Client),
        Just(ContactKind::Frac),
        "[A-Z][a-z]{2,6}".prop_map(ContactKind::Custom),
    ]
}

/// Strategy for a single contact with the given id.
pub fn contact_strategy(id: String) -> impl Strategy<Value = Contact> {
    (
        "[A-Z][a-z]{1,6}( [A-Z][a-z]{1,6})?",
        prop_oneof![Just("Halcyon"), Just("Borealis"), Just("")],
        prop_oneof![Just("Pad 7"), Just("Pad 9"), Just("")],
        optional_value_strategy(),
        prop::option::of(prop_oneof![Just("Red"), Just("Blue")]),
        prop::option::of(prop_oneof![Just("Day"), Just("Night")]),
        prop::option::of(prop_oneof![Just("a@x.com"), Just("b@x.com")]),
        kind_strategy(),
        0u64..1000u64,
    )
        .prop_map(
            move |(name, company, job, title, crew, shift, email, kind, ts)| {
                let mut builder = Contact::builder(&id, &name)
                    .company(company)
                    .job(job)
                    .kind(kind)
                    .last_updated(ts);
                if let Some(title) = title {
                    builder = builder.title(&title);
                }
                if let Some(crew) = crew {
                    builder = builder.crew(crew);
                }
                if let Some(shift) = shift {
                    builder = builder.shift(shift);
                }
                if let Some(email) = email {
                    builder = builder.email(email);
                }
                builder.build()
            },
        )
}

/// Strategy for a snapshot of up to `max` contacts with unique ids.
pub fn contacts_strategy(max: usize) -> impl Strategy<Value = Vec<Contact>> {
    (0..=max).prop_flat_map(|n| {
        (0..n)
            .map(|i| contact_strategy(format!("c{}", i)))
            .collect::<Vec<_>>()
    })
}
