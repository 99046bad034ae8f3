use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use artscope_core::io::{load_raster, save_mask_png};
use artscope_core::stats::composition::edge_mask;
use artscope_core::stats::extract_features_with;

use crate::summary::print_feature_summary;

#[derive(Clone, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input image file
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Load extraction parameters from a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the binary edge mask as a PNG
    #[arg(long)]
    pub edge_mask: Option<PathBuf>,
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;

    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let features = extract_features_with(&raster, &config);

    if let Some(ref mask_path) = args.edge_mask {
        let mask = edge_mask(&raster.to_gray(), &config.edges);
        save_mask_png(&mask, mask_path)
            .with_context(|| format!("Failed to write edge mask to {}", mask_path.display()))?;
    }

    match args.format {
        FormatArg::Text => print_feature_summary(&args.file, &features),
        FormatArg::Json => println!("{}", serde_json::to_string_pretty(&features)?),
    }

    Ok(())
}
