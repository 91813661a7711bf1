//! Default image processing backend — no system dependencies.
//!
//! Everything, libwebp included, is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG) | `image` crate (pure Rust decoders) |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → WebP (lossy) | libwebp via the `webp` crate (quality + method 6) |
//! | Encode → PNG (lossless) | `image::codecs::png::PngEncoder`, `CompressionType::Best` |
//! | Encode → ICO | `image::codecs::ico::IcoEncoder`, PNG-compressed frames |
//!
//! Exact square dimensions are requested via `resize_exact` — aspect ratio is
//! *not* preserved. A non-square source gets stretched; that matches the
//! tool's contract (the logo is square).

use super::backend::{BackendError, ImageBackend, SourceInfo};
use super::params::{EncodeFormat, EncodeParams, IconParams};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::{CompressionType, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Default backend using the `image` crate ecosystem plus libwebp.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
///
/// A missing or unreadable file is a decode failure: the caller asked for
/// pixels and there are none to be had.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .decode()
        .map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Encode as lossy WebP at the given quality with maximum compression effort
/// (libwebp method 6, the slowest/smallest setting).
fn encode_webp(img: &DynamicImage, quality: u32) -> Result<Vec<u8>, String> {
    let rgba = img.to_rgba8();
    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height());

    let mut config = webp::WebPConfig::new().map_err(|_| "libwebp config init failed".to_string())?;
    config.quality = quality as f32;
    config.method = 6;

    let encoded = encoder
        .encode_advanced(&config)
        .map_err(|e| format!("WebP encode failed: {e:?}"))?;
    Ok(encoded.to_vec())
}

/// Encode as lossless PNG at the encoder's best compression level.
fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, String> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new_with_quality(
        Cursor::new(&mut buf),
        CompressionType::Best,
        image::codecs::png::FilterType::Adaptive,
    );
    img.write_with_encoder(encoder)
        .map_err(|e| format!("PNG encode failed: {e}"))?;
    Ok(buf)
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<SourceInfo, BackendError> {
        let img = load_image(path)?;
        let bytes = std::fs::metadata(path)?.len();
        Ok(SourceInfo {
            width: img.width(),
            height: img.height(),
            color_mode: format!("{:?}", img.color()),
            bytes,
        })
    }

    fn resize_encode(&self, params: &EncodeParams) -> Result<u64, BackendError> {
        let img = load_image(&params.source)?;
        let resized = img.resize_exact(params.px, params.px, FilterType::Lanczos3);

        let encoded = match params.format {
            EncodeFormat::Webp { quality } => encode_webp(&resized, quality.value()),
            EncodeFormat::Png => encode_png(&resized),
        }
        .map_err(|message| BackendError::Encode {
            path: params.output.clone(),
            message,
        })?;

        std::fs::write(&params.output, &encoded)?;
        Ok(encoded.len() as u64)
    }

    fn write_icon(&self, params: &IconParams) -> Result<u64, BackendError> {
        let img = load_image(&params.source)?;

        // Each frame is resized from the full source, not from a smaller
        // variant, and PNG-compressed inside the container.
        let mut frames = Vec::with_capacity(params.sizes.len());
        for &px in &params.sizes {
            let frame = img.resize_exact(px, px, FilterType::Lanczos3).to_rgba8();
            frames.push(
                IcoFrame::as_png(frame.as_raw(), px, px, ExtendedColorType::Rgba8).map_err(
                    |e| BackendError::Encode {
                        path: params.output.clone(),
                        message: format!("ICO frame encode failed: {e}"),
                    },
                )?,
            );
        }

        let mut buf = Vec::new();
        IcoEncoder::new(Cursor::new(&mut buf))
            .encode_images(&frames)
            .map_err(|e| BackendError::Encode {
                path: params.output.clone(),
                message: format!("ICO encode failed: {e}"),
            })?;

        std::fs::write(&params.output, &buf)?;
        Ok(buf.len() as u64)
    }
}
