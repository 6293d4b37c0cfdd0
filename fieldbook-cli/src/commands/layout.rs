//! Layout Command

use anyhow::Result;
use fieldbook_core::RelationshipGraph;

use crate::config::CliConfig;
use crate::display;

/// Prints node positions for the configured canvas.
pub fn run(config: &CliConfig) -> Result<()> {
    let contacts = config.load_contacts()?;
    let graph = RelationshipGraph::build(&contacts, &config.engine);
    let positions = graph.positions(&config.engine);

    if config.json() {
        return display::json(&positions);
    }

    if positions.is_empty() {
        display::info("No contacts to lay out");
        return Ok(());
    }

    println!();
    println!(
        "Layout ({}x{}, {} steps):",
        config.engine.canvas_width, config.engine.canvas_height, config.engine.layout_iterations
    );
    display::display_positions(&positions);
    println!();

    Ok(())
}
