//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the [`pipeline`](crate::pipeline) (which decides what
//! artifacts to create) and the [`backend`](super::backend) (which does the
//! actual pixel work). This separation allows swapping backends (e.g. for
//! testing with a recording mock) without changing orchestration logic.
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100, default 92). Clamped on construction.
//! - [`EncodeFormat`] — Which encoder an output goes through: lossy WebP or lossless PNG.
//! - [`EncodeParams`] — Full specification for one resized output: source, output path, square dimension, format.
//! - [`IconParams`] — Full specification for the multi-resolution icon: source, output path, ordered frame sizes.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(92)
    }
}

/// Output encoding for a resized artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeFormat {
    /// Lossy WebP at the given quality, maximum compression effort.
    Webp { quality: Quality },
    /// Lossless PNG at the encoder's best compression level.
    Png,
}

/// Parameters for a resize-and-encode operation producing one square output.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Exact output width and height.
    pub px: u32,
    pub format: EncodeFormat,
}

/// Parameters for packing a multi-resolution icon container.
#[derive(Debug, Clone, PartialEq)]
pub struct IconParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Frame dimensions in container order.
    pub sizes: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_92() {
        assert_eq!(Quality::default().value(), 92);
    }
}
