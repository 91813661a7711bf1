//! Pipeline orchestration: identify → resize/encode per size → favicon pack.
//!
//! One straight-line pass, fully synchronous. Every artifact write goes
//! through the [`ImageBackend`] trait; this module only decides *what* to
//! produce (filenames, order, reduction math) and aggregates the results
//! for the report.
//!
//! ## Output Structure
//!
//! ```text
//! public/optimized/
//! ├── logo-1024.webp    # lossy, quality 92, method 6
//! ├── logo-1024.png     # lossless, best compression
//! ├── ... (512, 256, 64)
//! └── favicon.ico       # 16/32/48/64 px frames, in that order
//! ```
//!
//! Outputs are overwritten deterministically by filename, so re-running is
//! idempotent. There is no partial-failure recovery: the first error aborts
//! the run and leaves already-written artifacts in place.

use crate::config::{PipelineConfig, SizeSpec};
use crate::imaging::{
    BackendError, EncodeFormat, EncodeParams, IconParams, ImageBackend, SourceInfo,
};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Imaging(#[from] BackendError),
}

/// One written output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub path: PathBuf,
    pub bytes: u64,
}

/// One size table entry's pair of artifacts plus their reduction percentages.
#[derive(Debug, Clone)]
pub struct ResultRecord {
    pub spec: SizeSpec,
    pub webp: OutputArtifact,
    pub png: OutputArtifact,
    pub webp_reduction: f64,
    pub png_reduction: f64,
}

/// Everything the report needs, in table order.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub source_path: PathBuf,
    pub source: SourceInfo,
    pub records: Vec<ResultRecord>,
    pub favicon: OutputArtifact,
    /// Absolute output directory, for the report's closing line.
    pub output_dir: PathBuf,
}

/// Percentage size reduction of an artifact against the original source.
///
/// Negative when the artifact is larger than the source; never clamped.
/// The baseline is always the full-size source file, even for the smaller
/// variants — a deliberate simplification the report narrates as-is.
pub fn reduction_percent(artifact_bytes: u64, source_bytes: u64) -> f64 {
    (1.0 - artifact_bytes as f64 / source_bytes as f64) * 100.0
}

/// Run the full pipeline.
///
/// Creates the output directory (idempotent), identifies the source (an
/// unreadable source fails here, before any artifact is written), produces a
/// WebP + PNG pair per size table entry in table order, then packs the
/// favicon. Any backend error aborts immediately.
pub fn run(
    config: &PipelineConfig,
    backend: &impl ImageBackend,
) -> Result<PipelineReport, PipelineError> {
    std::fs::create_dir_all(&config.output_dir)?;

    let source = backend.identify(&config.source)?;

    let mut records = Vec::with_capacity(config.sizes.len());
    for spec in &config.sizes {
        let webp_path = config.output_dir.join(format!("logo-{}.webp", spec.px));
        let webp_bytes = backend.resize_encode(&EncodeParams {
            source: config.source.clone(),
            output: webp_path.clone(),
            px: spec.px,
            format: EncodeFormat::Webp {
                quality: config.webp_quality,
            },
        })?;

        let png_path = config.output_dir.join(format!("logo-{}.png", spec.px));
        let png_bytes = backend.resize_encode(&EncodeParams {
            source: config.source.clone(),
            output: png_path.clone(),
            px: spec.px,
            format: EncodeFormat::Png,
        })?;

        records.push(ResultRecord {
            spec: *spec,
            webp_reduction: reduction_percent(webp_bytes, source.bytes),
            png_reduction: reduction_percent(png_bytes, source.bytes),
            webp: OutputArtifact {
                path: webp_path,
                bytes: webp_bytes,
            },
            png: OutputArtifact {
                path: png_path,
                bytes: png_bytes,
            },
        });
    }

    let favicon_path = config.output_dir.join("favicon.ico");
    let favicon_bytes = backend.write_icon(&IconParams {
        source: config.source.clone(),
        output: favicon_path.clone(),
        sizes: config.favicon_sizes.clone(),
    })?;

    // Canonicalize succeeds here since create_dir_all already ran; fall back
    // to the configured path just in case.
    let output_dir = std::fs::canonicalize(&config.output_dir)
        .unwrap_or_else(|_| config.output_dir.clone());

    Ok(PipelineReport {
        source_path: config.source.clone(),
        source,
        records,
        favicon: OutputArtifact {
            path: favicon_path,
            bytes: favicon_bytes,
        },
        output_dir,
    })
}
