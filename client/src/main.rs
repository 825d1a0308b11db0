use std::path::PathBuf;

use anyhow::Context;
use board::{parse_side, Algorithm, Difficulty};
use clap::Parser;
use client::config::Config;
use client::logging::init_tracing;

/// Play Connect 4 in the terminal against a remote engine.
#[derive(Parser, Debug)]
#[command(name = "connect4", version, about)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Remote move endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Engine search: mcts or ab
    #[arg(long)]
    algorithm: Option<Algorithm>,

    /// Engine strength, 1-5
    #[arg(long)]
    difficulty: Option<i64>,

    /// Side played by the engine: one, two or none
    #[arg(long)]
    ai_player: Option<String>,
}

impl Cli {
    fn apply(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(algorithm) = self.algorithm {
            config.match_settings.algorithm = algorithm;
        }
        if let Some(level) = self.difficulty {
            config.match_settings.difficulty = Difficulty::new(level)?;
        }
        if let Some(side) = &self.ai_player {
            config.match_settings.ai_player = parse_side(side)?;
        }
        config.validate()?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_or_default(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    cli.apply(&mut config)?;

    client::runtime::run(config).await
}
