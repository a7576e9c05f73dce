//! Strip command
//!
//! Remove every tag outside an allow-list, keeping the text.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use super::{load_config, read_input, write_output};

/// Arguments for the strip command
#[derive(Debug, Args)]
pub struct StripArgs {
    /// Comment HTML file (stdin if not specified)
    pub input: Option<PathBuf>,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Tag to keep (repeatable). Defaults to the configured allow-list.
    #[arg(long = "allow", value_name = "TAG")]
    pub allow: Vec<String>,
}

/// Execute the strip command
pub fn execute(args: StripArgs, config_path: Option<&Path>) -> Result<()> {
    let allowed = if args.allow.is_empty() {
        load_config(config_path)?.filter.allowed_tags
    } else {
        args.allow
    };

    let input = read_input(args.input.as_deref())?;
    let output = clf_core::strip_tags(&input, &allowed);

    write_output(args.output.as_deref(), &output)
}
