//! CLI Configuration

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use fieldbook_core::{Contact, EngineConfig};
use tracing::debug;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled tables for terminals.
    Table,
    /// Pretty-printed JSON for scripts.
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// JSON file holding the contact snapshot.
    pub contacts_path: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Engine parameters.
    pub engine: EngineConfig,
}

/// File name of the default snapshot inside the data directory.
const CONTACTS_FILE: &str = "contacts.json";

impl CliConfig {
    /// Returns the default snapshot path (`<data dir>/fieldbook/contacts.json`).
    pub fn default_contacts_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fieldbook")
            .join(CONTACTS_FILE)
    }

    /// Returns true if JSON output was requested.
    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Loads and parses the contact snapshot.
    pub fn load_contacts(&self) -> Result<Vec<Contact>> {
        let path = &self.contacts_path;
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read contacts from {}", path.display()))?;
        let contacts = Contact::parse_snapshot(&json)
            .with_context(|| format!("Invalid contact snapshot in {}", path.display()))?;

        debug!(count = contacts.len(), path = %path.display(), "loaded contacts");
        Ok(contacts)
    }
}

/// Reads a single contact from a JSON file.
pub fn load_contact(path: &Path) -> Result<Contact> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read contact from {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid contact in {}", path.display()))
}
