//! Deterministic ZIP packaging of named blobs.
//!
//! Every entry lands under one grouping folder ([`ARCHIVE_FOLDER`]), named
//! exactly by its reference filename. Timestamps are pinned to the ZIP epoch
//! so identical inputs produce byte-identical archives — reproducibility is
//! part of the contract, not an accident of the container library.
//!
//! Duplicate entry names are written as-is, without renaming or
//! deduplication: legacy filenames are authoritative, and the ZIP format
//! permits repeated names even though consumers may find them surprising.

use std::io::{Cursor, Write};
use thiserror::Error;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Grouping folder for all archive entries.
pub const ARCHIVE_FOLDER: &str = "resized_logos";

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("zip write failed: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Pack named blobs into a single in-memory ZIP archive.
///
/// Entries appear in input order. This only runs once every batch item has
/// completed; a failure here is fatal upstream since partial archives are
/// never valid output.
pub fn pack<'a, I>(entries: I) -> Result<Vec<u8>, ArchiveError>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    for (name, bytes) in entries {
        writer.start_file(format!("{ARCHIVE_FOLDER}/{name}"), options)?;
        writer.write_all(bytes)?;
    }

    Ok(writer.finish()?.into_inner())
}
