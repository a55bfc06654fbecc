//! High-level, ergonomic library API: normalize a single image, run a batch
//! over a session, and helpers for building selections from the file system.
//! Prefer these entrypoints over the low-level processing modules when
//! embedding SQUAREPAD.
use std::path::{Path, PathBuf};

use crate::core::batch::{self, BatchResult, NullProgress, ProgressSink};
use crate::core::params::NormalizeParams;
use crate::core::processing::normalize;
use crate::core::session::Session;
use crate::error::Result;
use crate::io::scan;

/// Normalize one image file onto a square canvas at `output`.
pub fn normalize_to_path(input: &Path, output: &Path, params: &NormalizeParams) -> Result<()> {
    normalize::normalize_to_square(input, output, params)
}

/// Run a batch over `session`, emitting one progress tick per item.
pub fn run_batch(
    session: &Session,
    params: &NormalizeParams,
    progress: &dyn ProgressSink,
) -> Result<BatchResult> {
    batch::run_batch(session, params, progress)
}

/// Convenience: process `paths` into `destination` without building a
/// session by hand. Deduplicates by base filename like any other selection.
pub fn process_paths<I>(paths: I, destination: &Path, params: &NormalizeParams) -> Result<BatchResult>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut session = Session::new();
    session.add_images(paths);
    session.set_destination(destination.to_path_buf());
    batch::run_batch(&session, params, &NullProgress)
}

/// Supported images directly inside `dir`, sorted; see [`scan::scan_image_dir`].
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    scan::scan_image_dir(dir)
}
