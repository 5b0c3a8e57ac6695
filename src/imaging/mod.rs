//! Pixel work — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Resample** | `image::imageops::resize` with `Lanczos3` |
//! | **Encode PNG** | `image::codecs::png::PngEncoder` |
//! | **Encode JPEG** | `JpegEncoder::new_with_quality` (fixed 95) |
//! | **Encode WebP** | `WebPEncoder::new_lossless` |
//!
//! The module is split into:
//! - **Resample**: exact-dimension Lanczos resampling ([`resample`])
//! - **Encode**: format allow-list, PNG fallback, serialization ([`encode`])

pub mod encode;
pub mod resample;

pub use encode::{EncodeError, LOSSY_QUALITY, OutputFormat, encode};
pub use resample::{ResampleError, resample};
