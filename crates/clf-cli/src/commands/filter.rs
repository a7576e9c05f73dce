//! Filter command
//!
//! Run the link filter pipeline over one comment.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use clf_core::{CommentText, FilterStage, LinkFilter};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{load_config, read_input, write_output};

/// Stage options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StageArg {
    /// Remove tags outside the allow-list
    StripTags,
    /// Empty hrefs and mask anchor text
    MaskAnchors,
    /// Force rel="nofollow" onto anchors
    AddNofollow,
}

impl From<StageArg> for FilterStage {
    fn from(stage: StageArg) -> Self {
        match stage {
            StageArg::StripTags => FilterStage::StripTags,
            StageArg::MaskAnchors => FilterStage::MaskAnchors,
            StageArg::AddNofollow => FilterStage::AddNofollow,
        }
    }
}

/// Arguments for the filter command
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Comment HTML file (stdin if not specified)
    pub input: Option<PathBuf>,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Stages to run instead of the configured pipeline (repeatable, in order)
    #[arg(long = "stage", value_enum)]
    pub stages: Vec<StageArg>,

    /// Print input and output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FilterReport {
    stages: Vec<FilterStage>,
    input: CommentText,
    output: CommentText,
}

/// Execute the filter command
pub fn execute(args: FilterArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = load_config(config_path)?;
    if !args.stages.is_empty() {
        config.filter.stages = args.stages.iter().copied().map(FilterStage::from).collect();
    }

    let link_filter =
        LinkFilter::with_config(config.filter).context("Invalid filter configuration")?;

    let input = CommentText::from(read_input(args.input.as_deref())?);
    let output = link_filter.filter_comment(&input);
    info!(
        stages = ?link_filter.stages(),
        input_len = input.as_str().len(),
        output_len = output.as_str().len(),
        "Filtered comment"
    );

    let rendered = if args.json {
        let report = FilterReport {
            stages: link_filter.stages().to_vec(),
            input,
            output,
        };
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        json
    } else {
        output.into_inner()
    };

    write_output(args.output.as_deref(), &rendered)
}
