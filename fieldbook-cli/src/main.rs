//! Fieldbook CLI
//!
//! Command-line interface for the field-operations contact engine.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use fieldbook_core::{EngineConfig, DEFAULT_DUPLICATE_THRESHOLD, DEFAULT_ITERATIONS};
use tracing_subscriber::EnvFilter;

use config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "fieldbook")]
#[command(version, about = "Duplicate detection and relationship graphs for field contacts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Contact snapshot (JSON array; default: <data dir>/fieldbook/contacts.json)
    #[arg(long, global = true, env = "FIELDBOOK_CONTACTS")]
    contacts: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Duplicate similarity threshold in (0, 1]
    #[arg(
        long,
        global = true,
        env = "FIELDBOOK_THRESHOLD",
        default_value_t = DEFAULT_DUPLICATE_THRESHOLD
    )]
    threshold: f64,

    /// Drop relationship edges weaker than this
    #[arg(long, global = true, default_value_t = 0.0)]
    min_strength: f64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List duplicate groups
    Duplicates,

    /// Show the suggested merged record for a duplicate group
    Merge {
        /// Group ID (e.g. dup-42)
        group_id: String,
    },

    /// Check a single contact against the directory
    Check {
        /// JSON file holding one contact
        file: PathBuf,
    },

    /// Show network metrics, clusters and relationships
    Graph,

    /// Find the shortest relationship path between two contacts
    Path {
        /// Starting contact ID
        from: String,
        /// Destination contact ID
        to: String,
    },

    /// List strongly connected neighbors of a contact
    Influencers {
        /// Contact ID
        id: String,
    },

    /// Compute node positions for drawing the graph
    Layout {
        /// Canvas width
        #[arg(long, default_value_t = 800.0)]
        width: f64,

        /// Canvas height
        #[arg(long, default_value_t = 600.0)]
        height: f64,

        /// Simulation steps
        #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: usize,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("fieldbook={}", level).parse()?)
                .add_directive(format!("fieldbook_core={}", level).parse()?),
        )
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut engine = EngineConfig::default()
        .with_duplicate_threshold(cli.threshold)
        .with_min_edge_strength(cli.min_strength);
    if let Commands::Layout {
        width,
        height,
        iterations,
    } = &cli.command
    {
        engine = engine
            .with_canvas(*width, *height)
            .with_layout_iterations(*iterations);
    }
    engine.validate()?;

    let config = CliConfig {
        contacts_path: cli
            .contacts
            .unwrap_or_else(CliConfig::default_contacts_path),
        format: cli.format,
        engine,
    };

    match cli.command {
        Commands::Duplicates => commands::duplicates::list(&config)?,
        Commands::Merge { group_id } => commands::duplicates::merge(&config, &group_id)?,
        Commands::Check { file } => commands::duplicates::check(&config, &file)?,
        Commands::Graph => commands::graph::summary(&config)?,
        Commands::Path { from, to } => commands::graph::path(&config, &from, &to)?,
        Commands::Influencers { id } => commands::graph::influencers(&config, &id)?,
        Commands::Layout { .. } => commands::layout::run(&config)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "fieldbook", &mut io::stdout());
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = init_logging(cli.verbose).and_then(|()| run(cli));
    if let Err(err) = result {
        display::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
