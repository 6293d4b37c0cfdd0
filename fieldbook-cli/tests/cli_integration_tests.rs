//! CLI Integration Tests
//!
//! Runs the `fieldbook` binary against a small site directory written to a
//! temporary snapshot file.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"[
  {"id": "1", "name": "Dana Ruiz", "company": "Halcyon", "job": "Pad 7",
   "email": "dana@halcyon.com", "notes": "Prefers radio", "lastUpdated": 100},
  {"id": "2", "name": "Dana Ruiz", "company": "Halcyon", "job": "Pad 7",
   "email": "dana@halcyon.com", "notes": "Night shift lead", "lastUpdated": 200},
  {"id": "3", "name": "Lee Park", "company": "Borealis", "job": "Pad 7"},
  {"id": "4", "name": "Sam Ortiz", "company": "Borealis", "job": "Pad 9"},
  {"id": "5", "name": "Riley Chen", "company": "Custom Wireline", "job": "Logging"}
]"#;

/// Helper to run CLI commands against an isolated snapshot
struct CliTestContext {
    dir: TempDir,
    contacts: PathBuf,
}

impl CliTestContext {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let contacts = dir.path().join("contacts.json");
        fs::write(&contacts, SNAPSHOT).expect("Failed to write snapshot");
        Self { dir, contacts }
    }

    /// Writes an extra file into the temp dir and returns its path
    fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Run a CLI command and return the output
    fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_fieldbook"));
        cmd.env_remove("FIELDBOOK_THRESHOLD")
            .arg("--contacts")
            .arg(&self.contacts);

        for arg in args {
            cmd.arg(arg);
        }

        cmd.output().expect("Failed to execute command")
    }

    /// Run a command and assert success
    fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        assert!(
            output.status.success(),
            "Command {:?} failed.\nStdout: {}\nStderr: {}",
            args,
            stdout,
            stderr
        );
        stdout
    }

    /// Run a command and assert failure
    fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        assert!(
            !output.status.success(),
            "Command {:?} should have failed but succeeded",
            args
        );
        stderr
    }

    /// Run a command with JSON output and parse stdout
    fn run_json(&self, args: &[&str]) -> Value {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let stdout = self.run_success(&full);
        serde_json::from_str(&stdout).expect("stdout should be JSON")
    }
}

// ===========================================================================
// Duplicates
// ===========================================================================

mod duplicates {
    use super::*;

    #[test]
    fn test_duplicates_json_lists_one_group() {
        let ctx = CliTestContext::new();
        let groups = ctx.run_json(&["duplicates"]);

        let groups = groups.as_array().expect("array");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0]["id"], "dup-1");
        assert_eq!(groups[0]["contactIds"], serde_json::json!(["2", "1"]));
    }

    #[test]
    fn test_duplicates_table_shows_names() {
        let ctx = CliTestContext::new();
        let output = ctx.run_success(&["duplicates"]);

        assert!(output.contains("dup-1"));
        assert!(output.contains("Dana Ruiz"));
        assert!(output.contains("Same email address"));
    }

    #[test]
    fn test_merge_uses_most_recent_base() {
        let ctx = CliTestContext::new();
        let merged = ctx.run_json(&["merge", "dup-1"]);

        assert_eq!(merged["baseId"], "2");
        assert_eq!(merged["mergedIds"], serde_json::json!(["1"]));
        assert_eq!(
            merged["contact"]["notes"],
            "Night shift lead\n---\nPrefers radio"
        );
    }

    #[test]
    fn test_merge_unknown_group_fails() {
        let ctx = CliTestContext::new();
        let stderr = ctx.run_failure(&["merge", "dup-99"]);

        assert!(stderr.contains("not found"));
    }

    #[test]
    fn test_check_flags_existing_contact() {
        let ctx = CliTestContext::new();
        let candidate = ctx.write_file(
            "candidate.json",
            r#"{"id": "new", "name": "Dana Ruiz", "email": "DANA@halcyon.com"}"#,
        );

        let matches = ctx.run_json(&["check", candidate.to_str().unwrap()]);
        let ids: Vec<&str> = matches
            .as_array()
            .expect("array")
            .iter()
            .map(|m| m["id2"].as_str().unwrap())
            .collect();

        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"1"));
        assert!(ids.contains(&"2"));
    }

    #[test]
    fn test_check_new_contact_reports_no_match() {
        let ctx = CliTestContext::new();
        let candidate = ctx.write_file(
            "candidate.json",
            r#"{"id": "new", "name": "Morgan Blake", "company": "Tidewater"}"#,
        );

        let output = ctx.run_success(&["check", candidate.to_str().unwrap()]);
        assert!(output.contains("looks like a new contact"));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let ctx = CliTestContext::new();
        let stderr = ctx.run_failure(&["--threshold", "1.5", "duplicates"]);

        assert!(stderr.contains("threshold"));
    }
}

// ===========================================================================
// Graph
// ===========================================================================

mod graph {
    use super::*;

    #[test]
    fn test_graph_json_has_all_nodes() {
        let ctx = CliTestContext::new();
        let graph = ctx.run_json(&["graph"]);

        assert_eq!(graph["nodes"].as_array().unwrap().len(), 5);
        assert_eq!(graph["metrics"]["totalContacts"], 5);
    }

    #[test]
    fn test_graph_table_prints_metrics() {
        let ctx = CliTestContext::new();
        let output = ctx.run_success(&["graph"]);

        assert!(output.contains("Density"));
        assert!(output.contains("Relationships"));
    }

    #[test]
    fn test_path_with_min_strength_takes_two_hops() {
        let ctx = CliTestContext::new();
        let path = ctx.run_json(&["--min-strength", "1", "path", "1", "4"]);

        let ids: Vec<&str> = path
            .as_array()
            .expect("array")
            .iter()
            .map(|e| e["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["edge-1-3", "edge-3-4"]);
    }

    #[test]
    fn test_path_unknown_contact_fails() {
        let ctx = CliTestContext::new();
        let stderr = ctx.run_failure(&["path", "1", "nobody"]);

        assert!(stderr.contains("nobody"));
    }

    #[test]
    fn test_influencers_lists_strong_neighbors() {
        let ctx = CliTestContext::new();
        let output = ctx.run_success(&["influencers", "3"]);

        assert!(output.contains("Sam Ortiz"));
        assert!(!output.contains("Riley Chen"));
    }
}

// ===========================================================================
// Layout
// ===========================================================================

mod layout {
    use super::*;

    #[test]
    fn test_layout_positions_within_margin() {
        let ctx = CliTestContext::new();
        let positions = ctx.run_json(&["layout", "--width", "400", "--height", "300"]);

        let positions = positions.as_object().expect("object");
        assert_eq!(positions.len(), 5);
        for pos in positions.values() {
            let x = pos["x"].as_f64().unwrap();
            let y = pos["y"].as_f64().unwrap();
            assert!((50.0..=350.0).contains(&x));
            assert!((50.0..=250.0).contains(&y));
        }
    }

    #[test]
    fn test_layout_rejects_zero_canvas() {
        let ctx = CliTestContext::new();
        ctx.run_failure(&["layout", "--width", "0"]);
    }
}

// ===========================================================================
// Errors and completions
// ===========================================================================

mod misc {
    use super::*;

    #[test]
    fn test_missing_snapshot_fails_with_path() {
        let ctx = CliTestContext::new();
        let output = Command::new(env!("CARGO_BIN_EXE_fieldbook"))
            .arg("--contacts")
            .arg(ctx.dir.path().join("absent.json"))
            .arg("duplicates")
            .output()
            .expect("Failed to execute command");

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("absent.json"));
    }

    #[test]
    fn test_completions_generate() {
        let ctx = CliTestContext::new();
        let output = ctx.run_success(&["completions", "bash"]);

        assert!(output.contains("fieldbook"));
    }
}
