//! Pixel buffer → encoded bytes, with a lossless-safe fallback.
//!
//! | Requested format | Encoder |
//! |---|---|
//! | PNG | `image::codecs::png::PngEncoder` |
//! | JPEG | `JpegEncoder::new_with_quality(_, 95)`, alpha dropped |
//! | WebP | `WebPEncoder::new_lossless` (the `image` crate's pure-Rust encoder) |
//! | anything else | falls back to PNG |
//!
//! The fallback mirrors the legacy behavior: formats the canvas could not
//! write (SVG, GIF, unknown types) silently became PNG rather than failing.
//! JPEG quality is fixed at 95 so output is deterministic and reproducible;
//! WebP output is lossless, which avoids pulling in libwebp C bindings.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, RgbaImage};
use serde::Serialize;
use std::io::Cursor;
use thiserror::Error;

/// Fixed quality for lossy encoding. Not configurable per call.
pub const LOSSY_QUALITY: u8 = 95;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("{format} encoder rejected the buffer: {source}")]
    Backend {
        format: &'static str,
        source: image::ImageError,
    },
}

/// The three formats the encoder can write.
///
/// Construction goes through [`OutputFormat::from_mime`], which is where the
/// PNG fallback for unsupported tokens lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutputFormat {
    Png,
    Jpeg,
    WebP,
}

impl OutputFormat {
    /// Map a declared MIME token to an output format.
    ///
    /// Exact three-way allow-list; everything else (gif, svg, unknown)
    /// becomes PNG. That is the effective format, and callers report it.
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "image/png" => Self::Png,
            "image/jpeg" => Self::Jpeg,
            "image/webp" => Self::WebP,
            _ => Self::Png,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::WebP => "WebP",
        }
    }
}

/// Serialize a pixel buffer into `format`.
///
/// Only genuine encoder backend failures error out; those are per-item
/// failures upstream, never fatal to a batch.
pub fn encode(img: &RgbaImage, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = Vec::new();

    let result = match format {
        OutputFormat::Png => {
            img.write_with_encoder(PngEncoder::new(Cursor::new(&mut bytes)))
        }
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb = DynamicImage::ImageRgba8(img.clone()).into_rgb8();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(
                Cursor::new(&mut bytes),
                LOSSY_QUALITY,
            ))
        }
        OutputFormat::WebP => {
            img.write_with_encoder(WebPEncoder::new_lossless(Cursor::new(&mut bytes)))
        }
    };

    result.map_err(|source| EncodeError::Backend {
        format: format.label(),
        source,
    })?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::synthetic_rgba;
    use image::ImageFormat;

    #[test]
    fn from_mime_maps_the_allow_list() {
        assert_eq!(OutputFormat::from_mime("image/png"), OutputFormat::Png);
        assert_eq!(OutputFormat::from_mime("image/jpeg"), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_mime("image/webp"), OutputFormat::WebP);
    }

    #[test]
    fn from_mime_falls_back_to_png() {
        for mime in ["image/gif", "image/svg+xml", "image/bmp", "", "nonsense"] {
            assert_eq!(OutputFormat::from_mime(mime), OutputFormat::Png, "{mime}");
        }
    }

    #[test]
    fn png_round_trips_dimensions_and_format() {
        let img = synthetic_rgba(48, 36);
        let bytes = encode(&img, OutputFormat::Png).unwrap();

        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (48, 36));
    }

    #[test]
    fn jpeg_round_trips_dimensions_and_format() {
        let img = synthetic_rgba(48, 36);
        let bytes = encode(&img, OutputFormat::Jpeg).unwrap();

        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (48, 36));
    }

    #[test]
    fn webp_round_trips_dimensions_and_format() {
        let img = synthetic_rgba(48, 36);
        let bytes = encode(&img, OutputFormat::WebP).unwrap();

        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::WebP);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (48, 36));
    }

    #[test]
    fn webp_is_lossless() {
        let img = synthetic_rgba(16, 16);
        let bytes = encode(&img, OutputFormat::WebP).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().into_rgba8();
        assert_eq!(decoded, img);
    }
}
