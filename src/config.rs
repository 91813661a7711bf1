//! Run configuration.
//!
//! All paths and constants are fixed at startup — there is no config file,
//! no environment lookup, and no runtime mutation. [`PipelineConfig::stock`]
//! builds the one configuration the CLI uses; tests construct their own with
//! temporary paths.
//!
//! The size table is an *ordered* list, not a map: report rows come out in
//! table order (largest first), and that order is part of the tool's
//! observable behavior.

use crate::imaging::Quality;
use std::path::PathBuf;

/// Fixed source image path.
pub const SOURCE_PATH: &str = "public/blackpiston-logo.png";

/// Fixed output directory, created if missing.
pub const OUTPUT_DIR: &str = "public/optimized";

/// One entry of the size table: target square dimension plus the label shown
/// in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub px: u32,
    pub label: &'static str,
}

/// Immutable configuration for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Source logo to load.
    pub source: PathBuf,
    /// Directory all artifacts are written into.
    pub output_dir: PathBuf,
    /// Ordered size table; one WebP + one PNG per entry.
    pub sizes: Vec<SizeSpec>,
    /// Frame dimensions packed into favicon.ico, in container order.
    pub favicon_sizes: Vec<u32>,
    /// Lossy WebP quality.
    pub webp_quality: Quality,
}

impl PipelineConfig {
    /// The stock configuration: hardcoded paths and the fixed size table.
    pub fn stock() -> Self {
        Self {
            source: PathBuf::from(SOURCE_PATH),
            output_dir: PathBuf::from(OUTPUT_DIR),
            sizes: vec![
                SizeSpec { px: 1024, label: "master" },
                SizeSpec { px: 512, label: "header" },
                SizeSpec { px: 256, label: "ui" },
                SizeSpec { px: 64, label: "favicon-base" },
            ],
            favicon_sizes: vec![16, 32, 48, 64],
            webp_quality: Quality::new(92),
        }
    }
}
