//! Batch orchestration: one source image, many replica targets.
//!
//! A run moves through the states
//!
//! ```text
//! Idle → Decoding → Processing → Packaging → Complete
//!              ↘ DecodeFailed (terminal)
//! ```
//!
//! The source is decoded exactly once; the decoded buffer is then shared
//! read-only across [rayon](https://docs.rs/rayon) workers, one per spec.
//! Per-item failures are caught and recorded — the loop never aborts early,
//! and a batch whose every item failed still completes (with an empty
//! archive and a warning-level report). Only three things are fatal: zero
//! targets, a source that won't decode, and an archive write failure.
//!
//! # Progress
//!
//! After each item completes (success or failure) the progress callback
//! receives `round(100 × completed / total)`. The completed count is bumped
//! under the same lock that invokes the callback, so the observed sequence
//! is strictly non-decreasing and ends at exactly 100 no matter which order
//! workers finish in.
//!
//! # Ordering
//!
//! Results are collected back into submission order before packaging, so
//! archive entry order is deterministic regardless of completion order.

use crate::archive::{self, ArchiveError};
use crate::imaging::{EncodeError, OutputFormat, ResampleError, encode, resample};
use crate::types::{BatchReport, ReferenceSpec, ReportItem};
use image::RgbaImage;
use rayon::prelude::*;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("no reference targets supplied")]
    NoTargets,
    #[error("failed to decode source image: {0}")]
    SourceDecode(#[source] image::ImageError),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Failure of a single item within a run. Recorded, never fatal.
#[derive(Error, Debug)]
pub enum ItemError {
    #[error("invalid target dimensions {width}x{height}")]
    Dimensions { width: u32, height: u32 },
    #[error(transparent)]
    Resample(#[from] ResampleError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Outcome for one [`ReferenceSpec`] within a run.
#[derive(Debug)]
pub enum ProcessingResult {
    Success {
        name: String,
        bytes: Vec<u8>,
        format: OutputFormat,
    },
    Failure {
        name: String,
        error: ItemError,
    },
}

/// A completed batch: the archive plus the per-item report.
#[derive(Debug)]
pub struct BatchOutcome {
    /// ZIP bytes ready for persistence. May contain zero entries if every
    /// item failed.
    pub archive: Vec<u8>,
    pub report: BatchReport,
}

/// Run the full replica pipeline over `specs`.
///
/// `progress` is invoked with integer percentages 0–100 as items complete.
/// It must be `Send` because items are processed on a worker pool and the
/// callback fires from whichever worker finishes an item.
pub fn run_batch<F>(
    source_bytes: &[u8],
    specs: &[ReferenceSpec],
    progress: F,
) -> Result<BatchOutcome, BatchError>
where
    F: Fn(u8) + Send,
{
    // Fail fast before touching the source: nothing to process.
    if specs.is_empty() {
        return Err(BatchError::NoTargets);
    }

    // Decoding. A failure here is terminal — without a decoded source there
    // is no per-target fallback.
    let source = decode_source(source_bytes)?;

    // Processing. The count is advanced under the same lock that fires the
    // callback so percentages can never be observed out of order.
    let total = specs.len();
    let tracker = Mutex::new((0usize, progress));

    let results: Vec<ProcessingResult> = specs
        .par_iter()
        .map(|spec| {
            let result = process_one(&source, spec);
            let mut guard = tracker.lock().unwrap();
            guard.0 += 1;
            let pct = percent(guard.0, total);
            (guard.1)(pct);
            result
        })
        .collect();

    // Packaging. Successes only, in submission order.
    let entries = results.iter().filter_map(|result| match result {
        ProcessingResult::Success { name, bytes, .. } => {
            Some((name.as_str(), bytes.as_slice()))
        }
        ProcessingResult::Failure { .. } => None,
    });
    let archive = archive::pack(entries)?;

    Ok(BatchOutcome {
        archive,
        report: build_report(specs, &results),
    })
}

fn decode_source(bytes: &[u8]) -> Result<RgbaImage, BatchError> {
    image::load_from_memory(bytes)
        .map(|img| img.into_rgba8())
        .map_err(BatchError::SourceDecode)
}

fn process_one(source: &RgbaImage, spec: &ReferenceSpec) -> ProcessingResult {
    match replicate(source, spec) {
        Ok((bytes, format)) => ProcessingResult::Success {
            name: spec.name.clone(),
            bytes,
            format,
        },
        Err(error) => ProcessingResult::Failure {
            name: spec.name.clone(),
            error,
        },
    }
}

fn replicate(
    source: &RgbaImage,
    spec: &ReferenceSpec,
) -> Result<(Vec<u8>, OutputFormat), ItemError> {
    // Extraction already enforces positive dimensions; re-check anyway since
    // specs are plain data and this guard is what keeps resampling total.
    if spec.width == 0 || spec.height == 0 {
        return Err(ItemError::Dimensions {
            width: spec.width,
            height: spec.height,
        });
    }

    let resized = resample(source, spec.width, spec.height)?;
    let format = OutputFormat::from_mime(&spec.declared_format);
    let bytes = encode(&resized, format)?;
    Ok((bytes, format))
}

/// `round(100 × completed / total)`, half away from zero like the legacy UI.
fn percent(completed: usize, total: usize) -> u8 {
    (100.0 * completed as f64 / total as f64).round() as u8
}

fn build_report(specs: &[ReferenceSpec], results: &[ProcessingResult]) -> BatchReport {
    let items: Vec<ReportItem> = specs
        .iter()
        .zip(results)
        .map(|(spec, result)| match result {
            ProcessingResult::Success { name, format, .. } => ReportItem {
                name: name.clone(),
                width: spec.width,
                height: spec.height,
                ok: true,
                format: Some(format.mime()),
                error: None,
            },
            ProcessingResult::Failure { name, error } => ReportItem {
                name: name.clone(),
                width: spec.width,
                height: spec.height,
                ok: false,
                format: None,
                error: Some(error.to_string()),
            },
        })
        .collect();

    let succeeded = items.iter().filter(|item| item.ok).count();
    let failed = items.len() - succeeded;

    BatchReport {
        items,
        succeeded,
        failed,
    }
}
