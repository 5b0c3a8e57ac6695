//! Reference metadata extraction: raw file bytes → [`ReferenceSpec`].
//!
//! Only the container header is parsed (via `ImageReader::into_dimensions`),
//! never the full pixel data — a reference file may be large, but all we
//! need from it is its name, its intrinsic dimensions, and its format.
//!
//! Ids come from an injectable [`IdSource`] (a monotonic counter) so spec
//! identity is deterministic under test and collisions are structurally
//! impossible, not merely improbable.

use crate::types::{ReferenceSpec, SpecId};
use image::ImageReader;
use std::io::Cursor;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("empty filename")]
    EmptyName,
    #[error("not a recognizable image: {0}")]
    Unreadable(#[from] image::ImageError),
    #[error("degenerate dimensions {width}x{height}")]
    Degenerate { width: u32, height: u32 },
}

/// Process-wide unique id generator for [`ReferenceSpec`]s.
///
/// A plain atomic counter: ids within one source are unique by construction
/// and sequential, which keeps test expectations stable.
#[derive(Debug, Default)]
pub struct IdSource(AtomicU64);

impl IdSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> SpecId {
        SpecId::new(self.0.fetch_add(1, Ordering::Relaxed))
    }
}

/// One reference file as supplied by the caller: name, declared MIME, bytes.
#[derive(Debug, Clone)]
pub struct ReferenceFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Read a reference file's intrinsic dimensions and build its spec.
///
/// Fails if the bytes are not a recognizable image container, if either
/// resolved dimension is zero, or if `declared_name` is empty. The spec's
/// `declared_format` is taken from the caller's MIME, not re-derived from
/// the bytes — legacy metadata is authoritative here.
pub fn extract(
    bytes: &[u8],
    declared_name: &str,
    declared_mime: &str,
    ids: &IdSource,
) -> Result<ReferenceSpec, ExtractError> {
    if declared_name.is_empty() {
        return Err(ExtractError::EmptyName);
    }

    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;

    if width == 0 || height == 0 {
        return Err(ExtractError::Degenerate { width, height });
    }

    Ok(ReferenceSpec {
        id: ids.next(),
        name: declared_name.to_string(),
        width,
        height,
        declared_format: declared_mime.to_string(),
    })
}

/// Extract specs from a set of reference files, isolating failures.
///
/// Each file resolves independently: a corrupt reference never blocks the
/// rest of the set. Returns the good specs in input order plus
/// `(name, error)` pairs for the rejects.
pub fn extract_all(
    files: &[ReferenceFile],
    ids: &IdSource,
) -> (Vec<ReferenceSpec>, Vec<(String, ExtractError)>) {
    let mut specs = Vec::new();
    let mut rejected = Vec::new();

    for file in files {
        match extract(&file.bytes, &file.name, &file.mime, ids) {
            Ok(spec) => specs.push(spec),
            Err(err) => rejected.push((file.name.clone(), err)),
        }
    }

    (specs, rejected)
}

/// Infer a declared MIME type from a filename, as a browser would supply it.
pub fn declared_mime(path: &Path) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
}
