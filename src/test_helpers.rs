//! Shared test utilities for the logo-replica test suite.
//!
//! Synthetic image builders (in-memory, no fixtures on disk) and a
//! [`ReferenceSpec`] factory so batch tests don't have to route every spec
//! through the extract stage.

use crate::types::{ReferenceSpec, SpecId};
use image::{ImageEncoder, Rgba, RgbaImage};
use std::io::Cursor;
use std::sync::atomic::{AtomicU64, Ordering};

/// Build a gradient RGBA test image. Deterministic for a given size.
pub fn synthetic_rgba(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    })
}

/// Encode a synthetic PNG in memory with the given dimensions.
pub fn synthetic_png(width: u32, height: u32) -> Vec<u8> {
    let img = synthetic_rgba(width, height);
    let mut bytes = Vec::new();
    image::codecs::png::PngEncoder::new(Cursor::new(&mut bytes))
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgba8)
        .unwrap();
    bytes
}

static NEXT_TEST_ID: AtomicU64 = AtomicU64::new(1_000);

/// Build a [`ReferenceSpec`] directly, bypassing extraction.
///
/// Dimensions are taken as given, so tests can construct specs the extract
/// stage would reject (zero width) to exercise downstream guards.
pub fn spec(name: &str, width: u32, height: u32, mime: &str) -> ReferenceSpec {
    ReferenceSpec {
        id: SpecId::new(NEXT_TEST_ID.fetch_add(1, Ordering::Relaxed)),
        name: name.to_string(),
        width,
        height,
        declared_format: mime.to_string(),
    }
}
