//! Scrollback viewer - entry point.

use clap::Parser;
use scrollback::config::{self, CliOverrides};
use scrollback::source::LineFeed;
use std::path::PathBuf;
use tracing::info;

/// Scrollback viewer - pipe text in and scroll through it.
#[derive(Parser, Debug)]
#[command(name = "scrollback")]
#[command(version)]
#[command(about = "Terminal scrollback viewer for piped log lines")]
pub struct Args {
    /// Start with timestamp prefixes hidden (toggle at runtime with 't')
    #[arg(long)]
    pub no_timestamps: bool,

    /// Path for tracing output (monitor with `tail -f`)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Foreground color name for the view
    #[arg(long)]
    pub fg: Option<String>,

    /// Background color name for the view
    #[arg(long)]
    pub bg: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Precedence chain: defaults -> config file -> env vars -> CLI args.
    let config = {
        let file = config::load_config_file(args.config.clone())?;
        let resolved = config::apply_env_overrides(config::resolve(file));
        config::apply_cli_overrides(
            resolved,
            CliOverrides {
                no_timestamps: args.no_timestamps,
                log_file: args.log_file.clone(),
                foreground: args.fg.clone(),
                background: args.bg.clone(),
            },
        )
    };

    scrollback::logging::init(&config.log_file_path)?;
    info!(config = ?config, "configuration resolved");

    // Refuses a TTY stdin; lines must be piped in.
    let feed = LineFeed::from_stdin()?;

    scrollback::view::run_with_feed(feed, &config)?;
    Ok(())
}
