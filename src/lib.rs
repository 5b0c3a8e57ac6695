//! # Logo Replica
//!
//! Replicates one high-resolution image into a batch of resized variants
//! that exactly match the pixel dimensions, naming, and format of a set of
//! legacy reference images, then bundles the variants into a single ZIP.
//!
//! The typical consumer is rebranding: a pile of old `logo.png` /
//! `logo-sm.jpg` / `favicon-32.png` files scattered across a deployment,
//! each of which must be replaced by the new artwork at its exact legacy
//! size and format, filenames intact.
//!
//! # Architecture: Extract → Batch → Archive
//!
//! ```text
//! 1. Extract   reference bytes  →  ReferenceSpec      (name, WxH, format)
//! 2. Batch     source + specs   →  ProcessingResults  (resample + encode per spec)
//! 3. Archive   successes        →  ZIP bytes          (deterministic, ordered)
//! ```
//!
//! The engine is a pure transformation: bytes in, bytes out. No network, no
//! persisted configuration, no environment variables. File acquisition and
//! persistence belong to the caller (the CLI in `main.rs`, or any UI).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`extract`] | Reads intrinsic dimensions/format from reference files, mints unique spec ids |
//! | [`imaging`] | Pixel work: exact-dimension Lanczos3 resampling, PNG/JPEG/WebP encoding with PNG fallback |
//! | [`batch`] | Orchestrates the per-spec pipeline: failure isolation, progress callbacks, ordered packaging |
//! | [`archive`] | Deterministic ZIP writer for named blobs under one grouping folder |
//! | [`types`] | Shared data model (`ReferenceSpec`, `BatchReport`) |
//! | [`output`] | CLI report formatting |
//!
//! # Design Decisions
//!
//! ## Distortion Is the Point
//!
//! Resampling applies independent scale factors per axis. A square source
//! replicated into a 3:1 banner slot comes out stretched — the legacy file's
//! dimensions are authoritative, and "aesthetically correct" thumbnails are
//! explicitly not the goal. There is no cropping and no aspect preservation
//! anywhere in the pipeline.
//!
//! ## Owned Resampling, Not a Drawing Surface
//!
//! The legacy implementation leaned on a host canvas with "high quality"
//! smoothing, an unobservable black box. Here resampling is
//! `image::imageops::resize` with Lanczos3 — explicit, deterministic, and
//! testable, for upscales and downscales alike.
//!
//! ## Lossless-Safe Format Fallback
//!
//! Output formats are an exact three-way allow-list (PNG, JPEG, WebP).
//! Anything else a reference declares — GIF, SVG, unknown — is written as
//! PNG rather than failing the item. JPEG quality is pinned at 95 so two
//! runs over the same inputs produce the same bytes.
//!
//! ## Per-Item Isolation, Fatal-Only-When-Necessary
//!
//! One bad reference never sinks the batch: its failure is recorded in the
//! report and the loop continues. Only a source that won't decode, an empty
//! target list, or an archive write failure abort the run, because none of
//! those leave anything meaningful to deliver. Partial archives are never
//! emitted.

pub mod archive;
pub mod batch;
pub mod extract;
pub mod imaging;
pub mod output;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
