//! Duplicates Command
//!
//! Find duplicate groups, suggest merges, and check single contacts.

use std::path::Path;

use anyhow::{bail, Result};
use fieldbook_core::{find_duplicate_groups, find_duplicates_of, suggest_merge_for_group};

use crate::config::{load_contact, CliConfig};
use crate::display;

/// Lists duplicate groups in the snapshot.
pub fn list(config: &CliConfig) -> Result<()> {
    let contacts = config.load_contacts()?;
    let groups = find_duplicate_groups(&contacts, config.engine.duplicate_threshold);

    if config.json() {
        return display::json(&groups);
    }

    if groups.is_empty() {
        display::success(&format!(
            "No duplicates among {} contacts at {:.0}% similarity",
            contacts.len(),
            config.engine.duplicate_threshold * 100.0
        ));
        return Ok(());
    }

    println!();
    println!("Duplicate groups ({}):", groups.len());
    println!();
    display::display_groups(&groups, &contacts);
    println!();
    display::info("Preview a merge with: fieldbook merge <GROUP>");

    Ok(())
}

/// Shows the suggested merged record for one group.
pub fn merge(config: &CliConfig, group_id: &str) -> Result<()> {
    let contacts = config.load_contacts()?;
    let groups = find_duplicate_groups(&contacts, config.engine.duplicate_threshold);

    let Some(group) = groups.iter().find(|g| g.id == group_id) else {
        bail!(
            "Duplicate group '{}' not found. Run 'fieldbook duplicates' to list groups.",
            group_id
        );
    };

    let merged = suggest_merge_for_group(group, &contacts)?;

    if config.json() {
        return display::json(&merged);
    }

    println!();
    display::display_merged(&merged);
    println!();

    Ok(())
}

/// Compares a single contact file against the snapshot.
pub fn check(config: &CliConfig, file: &Path) -> Result<()> {
    let candidate = load_contact(file)?;
    let contacts = config.load_contacts()?;
    let matches = find_duplicates_of(&candidate, &contacts, config.engine.duplicate_threshold);

    if config.json() {
        return display::json(&matches);
    }

    if matches.is_empty() {
        display::success(&format!("'{}' looks like a new contact", candidate.name()));
        return Ok(());
    }

    display::warning(&format!(
        "'{}' may duplicate {} existing contact(s):",
        candidate.name(),
        matches.len()
    ));
    println!();
    display::display_matches(&matches, &contacts);
    println!();

    Ok(())
}
