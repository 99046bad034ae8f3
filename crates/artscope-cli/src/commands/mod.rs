pub mod analyze;
pub mod batch;
pub mod config;
pub mod info;

use std::path::Path;

use anyhow::{Context, Result};
use artscope_core::config::ExtractorConfig;

/// Load an `ExtractorConfig` from a TOML file, or the defaults when no
/// path is given.
pub fn load_config(path: Option<&Path>) -> Result<ExtractorConfig> {
    match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read config {}", p.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Failed to parse config {}", p.display()))
        }
        None => Ok(ExtractorConfig::default()),
    }
}
