use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use artscope_core::io::probe_image;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let info = probe_image(&args.file)?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", info.width, info.height);
    println!("Color type:  {:?}", info.color_type);
    if let Some(format) = info.format {
        println!("Format:      {:?}", format);
    }

    let megapixels = info.width as f64 * info.height as f64 / 1e6;
    println!("Pixels:      {:.1} MP", megapixels);

    Ok(())
}
