//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations the pipeline
//! needs: identify, resize-and-encode, and icon packing.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — self-contained,
//! everything statically linked into the binary.

use super::params::{EncodeParams, IconParams};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Backend failure taxonomy. None of these are caught or retried; any one
/// aborts the run, leaving already-written artifacts in place.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },
}

/// Result of an identify operation: the source image's basic metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    pub width: u32,
    pub height: u32,
    /// Decoded color mode, e.g. `Rgba8`.
    pub color_mode: String,
    /// Size of the source file on disk.
    pub bytes: u64,
}

/// Trait for image processing backends.
///
/// Every backend must implement all three operations so the pipeline is
/// backend-agnostic. Operations take the source *path*, not decoded pixels;
/// the backend decodes per call. The pipeline always calls `identify` first,
/// so an unreadable source fails before any artifact is written.
pub trait ImageBackend {
    /// Decode the source's metadata: dimensions, color mode, file size.
    fn identify(&self, path: &Path) -> Result<SourceInfo, BackendError>;

    /// Resize to an exact square and encode to one output file.
    /// Returns the number of bytes written.
    fn resize_encode(&self, params: &EncodeParams) -> Result<u64, BackendError>;

    /// Resize to each frame size and pack all frames into one icon container.
    /// Returns the number of bytes written.
    fn write_icon(&self, params: &IconParams) -> Result<u64, BackendError>;
}
