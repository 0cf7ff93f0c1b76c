//! Inkmark CLI
//!
//! ```text
//! inkmark config                                 print the default editor.toml
//! inkmark replay scenario.json [--config FILE]   replay a touch scenario
//! ```
//!
//! Replay output goes to stdout as JSON lines; logs go to stderr and follow
//! `RUST_LOG` (default `info`).

mod scenario;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inkmark_editor::{EditorConfig, PhotoEditor};
use tracing_subscriber::EnvFilter;

use crate::scenario::Scenario;

#[derive(Parser)]
#[command(name = "inkmark")]
#[command(about = "Photo annotation overlay toolkit", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default editor configuration as TOML
    Config,

    /// Replay a JSON touch scenario and print the notifications it produces
    Replay {
        /// Scenario file
        #[arg(value_name = "SCENARIO.json")]
        scenario: PathBuf,

        /// Editor configuration (TOML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Config => {
            let toml = EditorConfig::default()
                .to_toml()
                .context("Failed to serialize default config")?;
            print!("{toml}");
            Ok(())
        }
        Commands::Replay { scenario, config } => replay(&scenario, config.as_deref()),
    }
}

fn replay(scenario_path: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EditorConfig::default(),
    };
    let scenario = Scenario::from_path(scenario_path)
        .with_context(|| format!("Failed to load scenario {}", scenario_path.display()))?;
    tracing::info!(
        steps = scenario.steps.len(),
        scenario = %scenario_path.display(),
        "replaying scenario"
    );

    let mut editor = PhotoEditor::new(config).context("Failed to create editor")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    scenario.run(&mut editor, &mut out)?;
    out.flush()?;
    Ok(())
}
