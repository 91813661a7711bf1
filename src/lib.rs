//! # Logo Optimizer
//!
//! One-shot build-time asset pipeline for a single source logo. Loads
//! `public/blackpiston-logo.png`, produces square resized copies at fixed
//! sizes in two encodings — lossy WebP (quality 92, maximum compression
//! effort) and lossless PNG (best compression) — packs a multi-resolution
//! `favicon.ico`, and prints a tabular report comparing each output's size
//! against the original file.
//!
//! ```text
//! public/optimized/
//! ├── logo-1024.webp   logo-1024.png    # master
//! ├── logo-512.webp    logo-512.png     # header
//! ├── logo-256.webp    logo-256.png     # ui
//! ├── logo-64.webp     logo-64.png      # favicon-base
//! └── favicon.ico                       # 16/32/48/64 px frames
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Immutable run configuration: paths, size table, favicon sizes, WebP quality |
//! | [`imaging`] | Pure-Rust image operations: [`ImageBackend`](imaging::ImageBackend) trait, parameter types, and the `image`/`webp` crate backend |
//! | [`pipeline`] | Orchestration: identify → resize/encode per size → favicon pack → report data |
//! | [`report`] | Plain-text report formatting — pure `format_*` functions plus a stdout wrapper |
//!
//! # Design Decisions
//!
//! ## Self-Contained Imaging (No ImageMagick)
//!
//! All pixel work goes through the `image` crate (Lanczos3 resampling, PNG
//! and ICO encoding) plus statically-linked libwebp via the `webp` crate for
//! lossy quality-parameterized WebP. No system binaries, no subprocess
//! calls — the tool is a single self-contained binary suitable for CI.
//!
//! ## Backend Trait at the Pixel Seam
//!
//! The pipeline never touches pixels directly. Everything goes through the
//! [`imaging::ImageBackend`] trait, so orchestration logic (filenames,
//! ordering, reduction math) is unit-testable with a recording mock and no
//! image encoding at all.
//!
//! ## Reduction Baseline
//!
//! Every reduction percentage is computed against the *original* source
//! file's byte size, including the smaller variants. This overstates savings
//! for the 512/256/64 px outputs, but it is the tool's documented, literal
//! behavior — the report narrates sizes plainly and percentages may be
//! negative when an output is larger than the source.

pub mod config;
pub mod imaging;
pub mod pipeline;
pub mod report;
