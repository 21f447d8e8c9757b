use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod app;
mod config;
mod flags;
mod repl;

use app::GameApp;
use config::{CliConfig, ReplConfig};

#[derive(Parser)]
#[command(name = "guess-the-flag")]
#[command(about = "Tap the flag of the named country, round after round")]
#[command(version)]
struct Cli {
    /// Quiz configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rounds, overriding the configuration file
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Seed for reproducible rounds
    #[arg(short, long)]
    seed: Option<u64>,

    /// Do not read or write the command history file
    #[arg(long)]
    no_history: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr unless FLAGQUIZ_LOG_OUTPUT says otherwise
    flagquiz::logging::init_from_env()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let cli = Cli::parse();

    let config = CliConfig {
        config_file: cli.config,
        rounds: cli.rounds,
        seed: cli.seed,
    };

    let mut repl_config = ReplConfig::default();
    if cli.no_history {
        repl_config.history_file = None;
    }

    let mut app = GameApp::new(config, repl_config)?;
    app.run()
}
