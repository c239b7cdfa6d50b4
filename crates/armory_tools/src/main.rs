//! Armory - Development Tools

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use armory_core::data::ProductionConfig;
use armory_core::error::Result;
use armory_core::production::MaterialProduction;
use armory_tools::inspect::{self, OutputFormat};
use armory_tools::simulate::{self, SimulationOptions};
use armory_tools::validate;

#[derive(Parser)]
#[command(name = "armory-tools")]
#[command(about = "Development tools for the war-material production plan")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate production config files
    Validate {
        /// Config file or directory of configs
        #[arg(default_value = "data")]
        path: PathBuf,
    },
    /// Run workshop rounds headless and report what was produced
    Simulate {
        /// Starting config (defaults to a fresh economy)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Session seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Number of rounds
        #[arg(long, default_value_t = 100)]
        rounds: u32,
        /// Write the final plan to a snapshot file
        #[arg(long)]
        save: Option<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a snapshot file
    Inspect {
        /// Snapshot written by `simulate --save`
        path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Validate { path } => {
            tracing::info!("Validating production configs in: {}", path.display());
            let count = validate::validate_path(&path)?;
            tracing::info!(count, "Validation passed");
        }
        Commands::Simulate {
            config,
            seed,
            rounds,
            save,
            json,
        } => {
            let config = match config {
                Some(path) => validate::load_config(&path)?,
                None => ProductionConfig::default(),
            };
            let mut production = MaterialProduction::from_config(&config)?;
            let report =
                simulate::run_simulation(&mut production, SimulationOptions { seed, rounds });

            if json {
                let text = serde_json::to_string_pretty(&report).map_err(|e| {
                    armory_core::error::ProductionError::Serialization(e.to_string())
                })?;
                println!("{text}");
            } else {
                println!("{report}");
            }

            if let Some(path) = save {
                inspect::write_snapshot(&path, &production)?;
            }
        }
        Commands::Inspect { path, format } => {
            let snapshot = inspect::read_snapshot(&path)?;
            println!("{}", inspect::render(&snapshot, format)?);
        }
    }
    Ok(())
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
