//! Image processing — self-contained, no system dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader` decode |
//! | **Resize** | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | **Encode → WebP (lossy)** | libwebp via the `webp` crate, method 6 |
//! | **Encode → PNG (lossless)** | `PngEncoder` with `CompressionType::Best` |
//! | **Encode → ICO** | `IcoEncoder` with PNG-compressed frames |
//!
//! The module is split into:
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend, SourceInfo};
pub use params::{EncodeFormat, EncodeParams, IconParams, Quality};
pub use rust_backend::RustBackend;
