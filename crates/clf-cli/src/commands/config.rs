//! Config command
//!
//! Manage comments-link-filter configuration.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use clf_core::Config;
use std::fs;
use std::path::{Path, PathBuf};

use super::{load_config, resolve_config_path, PROJECT_CONFIG_PATH};

const CONFIG_HEADER: &str = "# comments-link-filter configuration\n\n";

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Reset to default configuration
    Reset {
        /// Force reset without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file in use
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(config_path, json),
        ConfigCommand::Init { force } => init_config(config_path, force),
        ConfigCommand::Validate => validate_config(config_path),
        ConfigCommand::Reset { force } => reset_config(config_path, force),
        ConfigCommand::Path => print_path(config_path),
    }
}

/// File written by `init` and `reset`
fn target_path(config_path: Option<&Path>) -> PathBuf {
    config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_PATH))
}

fn default_config_text() -> Result<String> {
    let body = Config::default().to_toml_string()?;
    Ok(format!("{}{}", CONFIG_HEADER, body))
}

fn write_default(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    fs::write(path, default_config_text()?)
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn show_config(config_path: Option<&Path>, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let config = load_config(config_path)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        let source = resolve_config_path(config_path)
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "built-in defaults".to_string());
        println!("{}", "Configuration:".bold().underline());
        println!("{}", source.dimmed());
        println!();
        print!("{}", config.to_toml_string()?);
    }

    Ok(())
}

fn init_config(config_path: Option<&Path>, force: bool) -> Result<()> {
    use colored::Colorize;

    let path = target_path(config_path);

    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    write_default(&path)?;
    println!("{} Created {}", "✓".green(), path.display());

    Ok(())
}

fn validate_config(config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let Some(path) = resolve_config_path(config_path) else {
        eprintln!(
            "{} No configuration file found. Run '{}' to create one.",
            "⚠".yellow(),
            "comments-link-filter config init".cyan()
        );
        return Ok(());
    };

    match Config::load(&path) {
        Ok(config) => {
            println!("{} {} is valid", "✓".green(), path.display());
            let stages: Vec<_> = config.filter.stages.iter().map(|s| s.as_str()).collect();
            println!("  stages: {}", stages.join(" -> "));
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {}", "✗".red(), err);
            bail!("Invalid configuration: {}", path.display());
        }
    }
}

fn reset_config(config_path: Option<&Path>, force: bool) -> Result<()> {
    use colored::Colorize;

    let path = target_path(config_path);

    if !force {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt("Reset configuration to defaults?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    // Backup existing
    if path.exists() {
        let backup_path = format!(
            "{}.backup-{}",
            path.display(),
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        fs::copy(&path, &backup_path)?;
        println!("{} Backed up to {}", "✓".green(), backup_path);
    }

    write_default(&path)?;
    println!("{} Configuration reset to defaults.", "✓".green());

    Ok(())
}

fn print_path(config_path: Option<&Path>) -> Result<()> {
    match resolve_config_path(config_path) {
        Some(path) => println!("{}", path.display()),
        None => println!("(none, using built-in defaults)"),
    }
    Ok(())
}
