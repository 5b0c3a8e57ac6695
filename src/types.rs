//! Shared types used across the replica pipeline.
//!
//! [`ReferenceSpec`] is produced by the extract stage and consumed by the
//! batch stage; [`BatchReport`] is the per-item outcome summary the batch
//! stage hands back to callers (and that the CLI can persist as JSON).

use serde::Serialize;

/// Opaque identifier for a [`ReferenceSpec`], unique within a process.
///
/// Only an [`IdSource`](crate::extract::IdSource) can mint these, so two
/// specs in a run can never collide. Collaborator UIs key previews and
/// removal actions on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SpecId(u64);

impl SpecId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Identity and target descriptor for one legacy file to be replaced.
///
/// Created once per uploaded reference file, immutable thereafter.
/// Extraction guarantees `name` is non-empty and both dimensions are
/// positive; the batch stage still re-checks dimensions before resampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSpec {
    pub id: SpecId,
    /// Original filename, used verbatim as the archive entry name.
    pub name: String,
    /// Intrinsic pixel dimensions of the legacy file.
    pub width: u32,
    pub height: u32,
    /// MIME token from the original file (e.g. "image/png"). Drives the
    /// output format; unsupported tokens fall back to PNG at encode time.
    pub declared_format: String,
}

/// Outcome of one reference within a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct ReportItem {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub ok: bool,
    /// MIME of the format actually written (present on success).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Per-item result summary for a completed batch.
///
/// Items appear in submission order, matching archive entry order.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub items: Vec<ReportItem>,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchReport {
    /// True when the batch completed but produced an empty archive.
    /// A valid outcome, surfaced as a warning rather than an error.
    pub fn all_failed(&self) -> bool {
        self.succeeded == 0
    }
}
