//! Display Helpers
//!
//! Terminal output formatting and styling.

use std::collections::BTreeMap;

use console::style;
use fieldbook_core::{
    Cluster, Contact, DuplicateGroup, GraphEdge, GraphNode, MergedContact, NetworkMetrics,
    Position, SimilarityScore,
};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Prints any serializable value as pretty JSON.
pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    println!("{}", Table::new(rows).with(Style::rounded()));
}

fn name_of<'a>(contacts: &'a [Contact], id: &'a str) -> &'a str {
    contacts
        .iter()
        .find(|c| c.id() == id)
        .map(Contact::name)
        .unwrap_or(id)
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Group")]
    id: String,
    #[tabled(rename = "Members")]
    members: String,
    #[tabled(rename = "Similarity")]
    similarity: String,
    #[tabled(rename = "Reasons")]
    reasons: String,
}

/// Displays duplicate groups as a table.
pub fn display_groups(groups: &[DuplicateGroup], contacts: &[Contact]) {
    let rows = groups
        .iter()
        .map(|g| GroupRow {
            id: g.id.clone(),
            members: g
                .contact_ids
                .iter()
                .map(|id| name_of(contacts, id))
                .collect::<Vec<_>>()
                .join("\n"),
            similarity: percent(g.similarity),
            reasons: g.reasons.join("\n"),
        })
        .collect();
    print_table(rows);
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "Contact")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Similarity")]
    similarity: String,
    #[tabled(rename = "Reasons")]
    reasons: String,
}

/// Displays single-contact duplicate matches.
pub fn display_matches(matches: &[SimilarityScore], contacts: &[Contact]) {
    let rows = matches
        .iter()
        .map(|m| MatchRow {
            name: name_of(contacts, &m.id2).to_string(),
            id: m.id2.clone(),
            similarity: percent(m.similarity),
            reasons: m.reasons.join(", "),
        })
        .collect();
    print_table(rows);
}

/// Displays a merged contact in a formatted box.
pub fn display_merged(merged: &MergedContact) {
    let c = &merged.contact;
    let width = 40;
    let label = console::Style::new().dim();

    println!("{}", "─".repeat(width));
    println!("  {}", style(c.name()).bold().cyan());
    println!("{}", "─".repeat(width));

    let fields = [
        ("company", Some(c.company())),
        ("job", Some(c.job())),
        ("title", c.title()),
        ("crew", c.crew()),
        ("shift", c.shift()),
        ("email", c.email()),
        ("phone", c.phone()),
    ];
    for (name, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            println!("  {:10} {}", label.apply_to(name), value);
        }
    }
    if let Some(notes) = c.notes() {
        println!("  {}", label.apply_to("notes"));
        for line in notes.lines() {
            println!("    {}", line);
        }
    }

    println!("{}", "─".repeat(width));
    println!(
        "  {} {} (absorbs {})",
        label.apply_to("base"),
        merged.base_id,
        if merged.merged_ids.is_empty() {
            "nothing".to_string()
        } else {
            merged.merged_ids.join(", ")
        }
    );
}

/// Displays network metrics.
pub fn display_metrics(metrics: &NetworkMetrics) {
    let label = console::Style::new().dim();
    let rows = [
        ("Contacts", metrics.total_contacts.to_string()),
        ("Connections", metrics.total_connections.to_string()),
        ("Avg. connections", format!("{:.2}", metrics.average_connections)),
        ("Density", format!("{:.3}", metrics.network_density)),
        ("Largest cluster", metrics.largest_cluster_size.to_string()),
        ("Isolated", metrics.isolated_contacts.to_string()),
        (
            "Clusters",
            format!(
                "{} company, {} job, {} crew",
                metrics.company_clusters, metrics.job_clusters, metrics.crew_clusters
            ),
        ),
    ];
    for (name, value) in rows {
        println!("  {:18} {}", label.apply_to(name), value);
    }
}

#[derive(Tabled)]
struct ClusterRow {
    #[tabled(rename = "Cluster")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Members")]
    strength: usize,
    #[tabled(rename = "Color")]
    color: String,
}

/// Displays clusters as a table.
pub fn display_clusters(clusters: &[Cluster]) {
    let rows = clusters
        .iter()
        .map(|c| ClusterRow {
            name: c.name.clone(),
            kind: format!("{:?}", c.cluster_type).to_lowercase(),
            strength: c.strength,
            color: c.color.clone(),
        })
        .collect();
    print_table(rows);
}

#[derive(Tabled)]
struct EdgeRow {
    #[tabled(rename = "From")]
    source: String,
    #[tabled(rename = "To")]
    target: String,
    #[tabled(rename = "Strength")]
    strength: String,
    #[tabled(rename = "Type")]
    relationship: String,
    #[tabled(rename = "Details")]
    details: String,
}

/// Displays edges as a table, using contact names where known.
pub fn display_edges(edges: &[GraphEdge], contacts: &[Contact]) {
    let rows = edges
        .iter()
        .map(|e| EdgeRow {
            source: name_of(contacts, &e.source).to_string(),
            target: name_of(contacts, &e.target).to_string(),
            strength: format!("{:.1}", e.strength),
            relationship: e.relationship_type.to_string(),
            details: e.details.clone(),
        })
        .collect();
    print_table(rows);
}

#[derive(Tabled)]
struct NodeRow {
    #[tabled(rename = "Contact")]
    name: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Connections")]
    connections: usize,
    #[tabled(rename = "Centrality")]
    centrality: String,
}

/// Displays graph nodes with their metrics.
pub fn display_nodes(nodes: &[GraphNode]) {
    let rows = nodes
        .iter()
        .map(|n| NodeRow {
            name: n.name.clone(),
            company: n.company.clone(),
            connections: n.connection_count,
            centrality: format!("{:.1}", n.centrality_score),
        })
        .collect();
    print_table(rows);
}

#[derive(Tabled)]
struct PositionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "X")]
    x: String,
    #[tabled(rename = "Y")]
    y: String,
}

/// Displays layout positions.
pub fn display_positions(positions: &BTreeMap<String, Position>) {
    let rows = positions
        .iter()
        .map(|(id, p)| PositionRow {
            id: id.clone(),
            x: format!("{:.1}", p.x),
            y: format!("{:.1}", p.y),
        })
        .collect();
    print_table(rows);
}
