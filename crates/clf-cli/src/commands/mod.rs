//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod filter;
pub mod strip;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clf_core::Config;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project-local configuration file
pub const PROJECT_CONFIG_PATH: &str = ".comments-link-filter/config.toml";

/// comments-link-filter - mask links and enforce nofollow in comment HTML
#[derive(Debug, Parser)]
#[command(name = "comments-link-filter")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "COMMENTS_LINK_FILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the filter pipeline over a comment
    Filter(filter::FilterArgs),

    /// Remove tags outside the allow-list
    Strip(strip::StripArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Filter(args) => filter::execute(args, config_path),
        Commands::Strip(args) => strip::execute(args, config_path),
        Commands::Config(cmd) => config::execute(cmd, config_path),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Per-user configuration file in the platform config directory
fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "comments-link-filter", "comments-link-filter")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Find the configuration file to use
///
/// An explicit path always wins, even if it does not exist. Otherwise the
/// project file, then the per-user file, are used when present.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project = PathBuf::from(PROJECT_CONFIG_PATH);
    if project.exists() {
        return Some(project);
    }

    user_config_path().filter(|path| path.exists())
}

/// Load the effective configuration, falling back to defaults
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match resolve_config_path(explicit) {
        Some(path) => {
            let config = Config::load(&path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            Ok(config)
        }
        None => {
            debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Read comment HTML from a file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read from stdin")?;
            Ok(input)
        }
    }
}

/// Write output to a file, or stdout when no path is given
pub fn write_output(path: Option<&Path>, output: &str) -> Result<()> {
    use colored::Colorize;

    if let Some(path) = path {
        std::fs::write(path, output)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
        eprintln!("{} Wrote {}", "✓".green(), path.display());
    } else {
        std::io::stdout()
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}
