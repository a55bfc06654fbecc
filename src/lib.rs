#![doc = r#"
SQUAREPAD — a batch square-canvas image normalizer.

This crate provides a typed, ergonomic API for normalizing raster images onto
a square canvas: images far from square are centered on a black canvas, while
near-square images are either stretched up or passed through, depending on a
configurable policy. It powers the SQUAREPAD GUI and can be embedded in your
own Rust applications.

Quick start: normalize one image
--------------------------------
```rust,no_run
use std::path::Path;
use squarepad::{NormalizeParams, normalize_to_path};

fn main() -> squarepad::Result<()> {
    normalize_to_path(
        Path::new("/photos/banner.jpg"),
        Path::new("/out/banner.jpg"),
        &NormalizeParams::default(),
    )
}
```

Batch processing
----------------
```rust,no_run
use std::path::{Path, PathBuf};
use squarepad::{NormalizeParams, process_paths};

fn main() -> squarepad::Result<()> {
    let report = process_paths(
        vec![PathBuf::from("/photos/a.png"), PathBuf::from("/photos/b.png")],
        Path::new("/out"),
        &NormalizeParams::default(),
    )?;

    println!("processed={} failed={}", report.processed, report.failures.len());
    Ok(())
}
```

Sessions and progress
---------------------
Frontends own a [`Session`] (selection + destination) and drive it through
[`run_batch`], receiving one [`ProgressEvent`] per completed item via a
[`ProgressSink`]. Per-item decode/write failures are collected into the
[`BatchResult`] without aborting the batch; empty-selection and
unset-destination usage errors abort up front instead.

Configuration
-------------
The pad-vs-policy decision is driven by [`NormalizeParams`]: a pixel
`threshold` on the width/height difference (default 25; the stricter
historical variant is [`STRICT_THRESHOLD`]) and a [`SquarePolicy`] for
near-square images (`Stretch` by default, `Keep` to pass them through).

Feature flags
-------------
- `gui`: builds the eframe/egui desktop frontend (enabled by default).
- `full`: enables a complete feature set for typical end-to-end workflows.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — normalization, selection/session state, and the batch runner.
- [`io`] — persisted settings and supported-extension directory scans.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

// Curated public API surface
// Types
pub use crate::core::batch::{BatchResult, Failure, NullProgress, ProgressEvent, ProgressSink};
pub use crate::core::params::{DEFAULT_THRESHOLD, NormalizeParams, STRICT_THRESHOLD};
pub use crate::core::selection::{Selection, base_name};
pub use crate::core::session::Session;
pub use error::{Error, Result};
pub use types::{BatchOutcome, SquarePolicy};

// I/O helpers
pub use io::config::AppConfig;
pub use io::scan::{SUPPORTED_EXTENSIONS, is_supported_image, scan_image_dir};

// High-level API re-exports
pub use api::{normalize_to_path, process_paths, run_batch, scan_directory};
