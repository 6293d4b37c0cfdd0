//! Graph Command
//!
//! Relationship graph summaries and queries.

use anyhow::{bail, Result};
use fieldbook_core::{Contact, RelationshipGraph};

use crate::config::CliConfig;
use crate::display;

fn load_graph(config: &CliConfig) -> Result<(Vec<Contact>, RelationshipGraph)> {
    let contacts = config.load_contacts()?;
    let graph = RelationshipGraph::build(&contacts, &config.engine);
    Ok((contacts, graph))
}

fn require_node(graph: &RelationshipGraph, id: &str) -> Result<()> {
    if graph.node(id).is_none() {
        bail!("Contact '{}' not found", id);
    }
    Ok(())
}

/// Prints metrics, clusters and edges.
pub fn summary(config: &CliConfig) -> Result<()> {
    let (contacts, graph) = load_graph(config)?;

    if config.json() {
        return display::json(&graph);
    }

    println!();
    println!("Network:");
    display::display_metrics(&graph.metrics);
    println!();

    if !graph.clusters.is_empty() {
        println!("Clusters ({}):", graph.clusters.len());
        display::display_clusters(&graph.clusters);
        println!();
    }

    if graph.edges.is_empty() {
        display::info("No relationships found");
    } else {
        println!("Relationships ({}):", graph.edges.len());
        display::display_edges(&graph.edges, &contacts);
    }
    println!();

    Ok(())
}

/// Prints the shortest path between two contacts.
pub fn path(config: &CliConfig, from: &str, to: &str) -> Result<()> {
    let (contacts, graph) = load_graph(config)?;
    require_node(&graph, from)?;
    require_node(&graph, to)?;

    let path = graph.path(from, to);

    if config.json() {
        return display::json(&path);
    }

    if from == to {
        display::info("Source and destination are the same contact");
        return Ok(());
    }
    if path.is_empty() {
        display::warning(&format!("No connection between '{}' and '{}'", from, to));
        return Ok(());
    }

    println!();
    println!("Path ({} hops):", path.len());
    display::display_edges(&path, &contacts);
    println!();

    Ok(())
}

/// Prints the strongly connected neighbors of a contact.
pub fn influencers(config: &CliConfig, id: &str) -> Result<()> {
    let (_, graph) = load_graph(config)?;
    require_node(&graph, id)?;

    let influencers = graph.influencers(id);

    if config.json() {
        return display::json(&influencers);
    }

    if influencers.is_empty() {
        display::info(&format!("No strong connections for '{}'", id));
        return Ok(());
    }

    println!();
    println!("Influencers ({}):", influencers.len());
    display::display_nodes(&influencers);
    println!();

    Ok(())
}
