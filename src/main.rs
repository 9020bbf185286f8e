//! Transcript List Viewer - Entry Point

use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use tlv::config::{ConfigError, ResolvedConfig};
use tlv::state::AppState;
use tlv::view::ColorConfig;
use tracing::info;

/// Transcript List Viewer - browse date-grouped transcripts in the terminal
#[derive(Parser, Debug)]
#[command(name = "tlv")]
#[command(version)]
#[command(about = "TUI browser for large, date-grouped transcript collections")]
pub struct Args {
    /// Path to a JSON array of transcripts (demo data if not provided)
    pub file: Option<PathBuf>,

    /// Generate N synthetic transcripts instead of reading a file
    #[arg(long, value_name = "N", conflicts_with = "file")]
    pub demo: Option<usize>,

    /// Items rendered beyond each viewport edge
    #[arg(long, value_name = "N")]
    pub overscan: Option<usize>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, ConfigError> {
    let config_file = tlv::config::load_config_with_precedence(args.config.clone())?;
    let merged = tlv::config::merge_config(config_file);
    let with_env = tlv::config::apply_env_overrides(merged);
    let config = tlv::config::apply_cli_overrides(with_env, args.overscan);
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(&args)?;

    // Initialize tracing with configured log file path
    tlv::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // Grouping is relative to startup time for the whole session
    let now = Utc::now();
    let source = tlv::source::detect_source(args.file.clone(), args.demo);
    let transcripts = source.load(now)?;
    info!(source = ?source, count = transcripts.len(), "Transcripts ready");

    let state = AppState::new(transcripts, config.layout(), now).with_overscan(config.overscan);

    tlv::view::run(state, ColorConfig::from_env_and_args(args.no_color))?;

    Ok(())
}
