// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for contact::merge (merge suggestion)

mod common;

use common::fixtures::with_email;
use fieldbook_core::{
    find_duplicate_groups, suggest_merge, suggest_merge_for_group, Contact, DuplicateGroup,
    EngineError,
};

#[test]
fn test_empty_group_is_an_error() {
    let result = suggest_merge(&[]);
    assert!(matches!(result, Err(EngineError::EmptyGroup)));
}

#[test]
fn test_single_contact_returned_unchanged() {
    let contact = Contact::builder("1", "Dana Ruiz")
        .company("Halcyon")
        .notes("  gate code 4411 ")
        .last_updated(5)
        .build();
    let merged = suggest_merge(std::slice::from_ref(&contact)).unwrap();

    assert_eq!(merged.contact, contact);
    assert_eq!(merged.base_id, "1");
    assert!(merged.merged_ids.is_empty());
}

#[test]
fn test_most_recent_member_is_base() {
    let contacts = vec![
        Contact::builder("old", "Dana Ruiz").title("Operator").last_updated(10).build(),
        Contact::builder("new", "Dana Ruiz").title("Supervisor").last_updated(20).build(),
    ];
    let merged = suggest_merge(&contacts).unwrap();

    assert_eq!(merged.base_id, "new");
    assert_eq!(merged.contact.id(), "new");
    assert_eq!(merged.contact.title(), Some("Supervisor"));
    assert_eq!(merged.merged_ids, vec!["old"]);
}

#[test]
fn test_ties_keep_first_member_as_base() {
    let contacts = vec![
        Contact::builder("first", "Dana").last_updated(10).build(),
        Contact::builder("second", "Dana").last_updated(10).build(),
    ];
    assert_eq!(suggest_merge(&contacts).unwrap().base_id, "first");
}

#[test]
fn test_empty_fields_filled_first_found_wins() {
    let contacts = vec![
        Contact::builder("base", "Dana Ruiz").last_updated(30).build(),
        Contact::builder("x", "D. Ruiz")
            .company("Halcyon")
            .phone("555-0102")
            .last_updated(20)
            .build(),
        Contact::builder("y", "Dana R.")
            .company("Borealis")
            .email("dana@x.com")
            .crew("Red")
            .last_updated(10)
            .build(),
    ];
    let merged = suggest_merge(&contacts).unwrap().contact;

    assert_eq!(merged.name(), "Dana Ruiz");
    assert_eq!(merged.company(), "Halcyon");
    assert_eq!(merged.phone(), Some("555-0102"));
    assert_eq!(merged.email(), Some("dana@x.com"));
    assert_eq!(merged.crew(), Some("Red"));
    assert_eq!(merged.last_updated(), 30);
}

#[test]
fn test_blank_base_value_is_treated_as_empty() {
    let contacts = vec![
        Contact::builder("base", "Dana").email("   ").last_updated(2).build(),
        Contact::builder("other", "Dana").email("dana@x.com").last_updated(1).build(),
    ];
    let merged = suggest_merge(&contacts).unwrap().contact;
    assert_eq!(merged.email(), Some("dana@x.com"));
}

#[test]
fn test_filled_values_copied_verbatim() {
    let contacts = vec![
        Contact::builder("base", "Dana").last_updated(2).build(),
        Contact::builder("other", "Dana")
            .company(" Halcyon ")
            .crew(" Red ")
            .last_updated(1)
            .build(),
    ];
    let merged = suggest_merge(&contacts).unwrap().contact;
    assert_eq!(merged.company(), " Halcyon ");
    assert_eq!(merged.crew(), Some(" Red "));
}

#[test]
fn test_notes_deduplicated_and_joined() {
    let contacts = vec![
        Contact::builder("a", "Dana").notes("Prefers text").last_updated(1).build(),
        Contact::builder("b", "Dana").notes("Night shift lead").last_updated(2).build(),
        Contact::builder("c", "Dana").notes("Prefers text").last_updated(0).build(),
    ];
    let merged = suggest_merge(&contacts).unwrap().contact;

    assert_eq!(merged.notes(), Some("Night shift lead\n---\nPrefers text"));
}

#[test]
fn test_single_distinct_note_not_decorated() {
    let contacts = vec![
        Contact::builder("a", "Dana").last_updated(2).build(),
        Contact::builder("b", "Dana").notes("Gate 3").last_updated(1).build(),
    ];
    let merged = suggest_merge(&contacts).unwrap().contact;
    assert_eq!(merged.notes(), Some("Gate 3"));
}

#[test]
fn test_merge_for_detected_group() {
    let contacts = vec![
        with_email("1", "John Smith", "j@x.com", 10),
        with_email("2", "Jon Smith", "j@x.com", 20),
    ];
    let groups = find_duplicate_groups(&contacts, 0.8);
    let merged = suggest_merge_for_group(&groups[0], &contacts).unwrap();

    assert_eq!(merged.base_id, "2");
    assert_eq!(merged.contact.name(), "Jon Smith");
}

#[test]
fn test_merge_for_group_with_unknown_member() {
    let group = DuplicateGroup {
        id: "dup-x".to_string(),
        contact_ids: vec!["x".to_string(), "y".to_string()],
        similarity: 1.0,
        reasons: vec![],
    };
    let result = suggest_merge_for_group(&group, &[Contact::new("x", "X", "", "")]);
    assert!(matches!(result, Err(EngineError::ContactNotFound(id)) if id == "y"));
}
