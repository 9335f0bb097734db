//! poslog CLI — report z deltas between consecutive logged positions.
//!
//! Usage:
//!   poslog                      Analyze ./useful.log
//!   poslog <PATH>               Analyze a specific log file
//!   poslog --skip-unmatched     Ignore lines without a Vec3 record

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use poslog_common::config::AppConfig;
use poslog_position_model::MatchPolicy;

mod report;

#[derive(Parser)]
#[command(
    name = "poslog",
    about = "Print z deltas between consecutive Vec3 positions in a log",
    version,
    author
)]
struct Cli {
    /// Log file to analyze [default: useful.log]
    path: Option<PathBuf>,

    /// Skip lines without a `Vec3(..), rotation:` record instead of failing
    #[arg(long)]
    skip_unmatched: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Read configuration from this file instead of the standard location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_issue) = match &cli.config {
        Some(path) => {
            let config = AppConfig::load_from(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            (config, None)
        }
        None => AppConfig::load(),
    };

    // Command-line flags win over the config file
    if let Some(path) = cli.path {
        config.input.path = path;
    }
    if cli.skip_unmatched {
        config.input.skip_unmatched = true;
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }

    poslog_common::logging::init_logging(&config.logging);
    if let Some(issue) = config_issue {
        tracing::warn!("{issue}; using defaults");
    }

    let policy = MatchPolicy::from_skip_unmatched(config.input.skip_unmatched);
    report::run(config.input.path, policy)
}
