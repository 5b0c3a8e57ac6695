//! Exact-dimension resampling.
//!
//! The legacy system drew the source onto a canvas of the target size with
//! high-quality smoothing enabled. Here that hidden drawing primitive is an
//! explicit, testable operation: `image::imageops::resize` with Lanczos3,
//! applied for both upscaling and downscaling.
//!
//! Scale factors on each axis are independent. A 2000x2000 source resampled
//! to 64x13 comes out 64x13, distortion and all — replicating legacy sizing
//! exactly is the contract, not producing well-proportioned thumbnails.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResampleError {
    #[error("target dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
}

/// Resample `source` to exactly `width` x `height` pixels.
///
/// Never crops or letterboxes. Rejects zero dimensions even though callers
/// validate first. When the target matches the source dimensions the input
/// is returned as-is (Lanczos3 at scale 1.0 is an identity up to rounding,
/// so the short-circuit is observationally equivalent and much cheaper).
pub fn resample(
    source: &RgbaImage,
    width: u32,
    height: u32,
) -> Result<RgbaImage, ResampleError> {
    if width == 0 || height == 0 {
        return Err(ResampleError::ZeroDimension { width, height });
    }

    if (source.width(), source.height()) == (width, height) {
        return Ok(source.clone());
    }

    Ok(imageops::resize(source, width, height, FilterType::Lanczos3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::synthetic_rgba;

    #[test]
    fn output_has_exact_target_dimensions() {
        let source = synthetic_rgba(200, 150);

        for (w, h) in [(64, 64), (32, 32), (1, 1), (400, 300), (64, 13)] {
            let out = resample(&source, w, h).unwrap();
            assert_eq!((out.width(), out.height()), (w, h), "target {w}x{h}");
        }
    }

    #[test]
    fn non_uniform_axes_scale_independently() {
        let source = synthetic_rgba(100, 100);
        let out = resample(&source, 300, 10).unwrap();
        assert_eq!(out.width(), 300);
        assert_eq!(out.height(), 10);
    }

    #[test]
    fn zero_dimension_rejected() {
        let source = synthetic_rgba(10, 10);
        assert!(matches!(
            resample(&source, 0, 10),
            Err(ResampleError::ZeroDimension { .. })
        ));
        assert!(matches!(
            resample(&source, 10, 0),
            Err(ResampleError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn same_dimensions_is_pixel_identical() {
        let source = synthetic_rgba(50, 40);
        let out = resample(&source, 50, 40).unwrap();
        assert_eq!(out, source);
    }

    #[test]
    fn short_circuit_matches_full_resample_within_rounding() {
        // Lanczos3 at integer offsets hits the sinc zero crossings, so a
        // full resample to the same size differs from a copy by at most
        // float rounding per channel.
        let source = synthetic_rgba(30, 30);
        let full = imageops::resize(&source, 30, 30, FilterType::Lanczos3);
        let copied = resample(&source, 30, 30).unwrap();

        for (a, b) in full.pixels().zip(copied.pixels()) {
            for c in 0..4 {
                assert!(a.0[c].abs_diff(b.0[c]) <= 1);
            }
        }
    }

    #[test]
    fn upscale_smooths_rather_than_point_samples() {
        // A hard 1px checkerboard upscaled 8x must contain intermediate
        // values; nearest-neighbor would produce only 0 and 255.
        let source = RgbaImage::from_fn(4, 4, |x, y| {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            image::Rgba([v, v, v, 255])
        });

        let out = resample(&source, 32, 32).unwrap();
        let intermediate = out
            .pixels()
            .any(|p| p.0[0] > 16 && p.0[0] < 240);
        assert!(intermediate, "expected smoothed pixel values after upscale");
    }
}
