use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::warn;

use artscope_core::io::load_raster;
use artscope_core::raster::Raster;
use artscope_core::stats::{extract_batch_with_progress, FeatureSet};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tif", "tiff", "webp"];

#[derive(Args)]
pub struct BatchArgs {
    /// Directory of images to analyze
    pub dir: PathBuf,

    /// Write JSON lines to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Load extraction parameters from a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Serialize)]
struct BatchRecord<'a> {
    file: String,
    #[serde(flatten)]
    features: &'a FeatureSet,
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;

    let mut paths: Vec<PathBuf> = std::fs::read_dir(&args.dir)
        .with_context(|| format!("Failed to read directory {}", args.dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_image_extension(path))
        .collect();
    paths.sort();

    if paths.is_empty() {
        bail!("No image files found in {}", args.dir.display());
    }

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Decoding images");

    let mut loaded: Vec<(PathBuf, Raster)> = Vec::with_capacity(paths.len());
    for (i, path) in paths.iter().enumerate() {
        match load_raster(path) {
            Ok(raster) => loaded.push((path.clone(), raster)),
            Err(e) => warn!(file = %path.display(), error = %e, "skipping undecodable file"),
        }
        pb.set_position(i as u64 + 1);
    }
    pb.finish_with_message(format!("Decoded {} images", loaded.len()));

    if loaded.is_empty() {
        bail!("None of the files in {} could be decoded", args.dir.display());
    }

    let pb = ProgressBar::new(loaded.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Extracting features");

    let rasters: Vec<Raster> = loaded.iter().map(|(_, r)| r.clone()).collect();
    let features = extract_batch_with_progress(&rasters, &config, |done| {
        pb.set_position(done as u64);
    });
    pb.finish_with_message("Extraction complete");

    let mut lines = String::new();
    for ((path, _), features) in loaded.iter().zip(features.iter()) {
        let record = BatchRecord {
            file: path.display().to_string(),
            features,
        };
        lines.push_str(&serde_json::to_string(&record)?);
        lines.push('\n');
    }

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &lines)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {} records to {}", loaded.len(), path.display());
        }
        None => print!("{}", lines),
    }

    Ok(())
}

fn has_image_extension(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
