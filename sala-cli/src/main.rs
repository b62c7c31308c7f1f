//! Sala - room acoustics estimator
//! Command-line interface for analysing a room description

mod loader;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use sala_acoustic::{ingest, RoomAnalyzer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sala")]
#[command(author = "Silvano Neto")]
#[command(version = "2026.1.16")]
#[command(about = "Sala - reverberation time and room modes of a rectangular room", long_about = None)]
struct Cli {
    /// Verbose logging (per-band values, catalog misses)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a room description (.toml or .json)
    Analyze {
        /// Room description file
        #[arg(value_name = "ROOM")]
        room: PathBuf,

        /// Absorption catalog (.toml); the built-in catalog is used when omitted
        #[arg(short, long, value_name = "CATALOG", env = "SALA_CATALOG")]
        catalog: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the materials of an absorption catalog
    Catalog {
        /// Absorption catalog (.toml); the built-in catalog is used when omitted
        #[arg(short, long, value_name = "CATALOG", env = "SALA_CATALOG")]
        catalog: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Analyze { room, catalog, format } => {
            analyze_command(&room, catalog.as_deref(), format)
        }
        Commands::Catalog { catalog } => catalog_command(catalog.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "sala=debug,sala_acoustic=debug"
    } else {
        "sala=info,sala_acoustic=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// ============================================================================
// Commands
// ============================================================================

fn analyze_command(room: &Path, catalog: Option<&Path>, format: OutputFormat) -> Result<()> {
    let catalog = loader::load_catalog(catalog)?;
    let description = loader::load_room(room)?;
    let ingested = ingest(&description)
        .with_context(|| format!("Invalid room description {}", room.display()))?;

    let report = RoomAnalyzer::new(&catalog)
        .run_ingested(&ingested)
        .context("Room analysis failed")?;

    match format {
        OutputFormat::Text => print!("{}", report::TextReport(&report)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
    }

    Ok(())
}

fn catalog_command(catalog: Option<&Path>) -> Result<()> {
    let catalog = loader::load_catalog(catalog)?;
    print!("{}", report::CatalogTable(&catalog));
    Ok(())
}
