#![doc = r#"
LOGOGEN — a batch logo asset generator.

This crate turns a single source logo (`assets/logo.png`) into a fixed set of
square, Lanczos-resampled, optimized PNGs (96, 128, 256, and 384 pixels). It
powers the LOGOGEN CLI and can be embedded in your own Rust applications.

Quick start: generate the full batch
------------------------------------
```rust,no_run
use std::path::Path;
use logogen::generate_logo_assets;

fn main() -> logogen::Result<()> {
    let report = generate_logo_assets(Path::new("assets"))?;
    println!("generated={} errors={}", report.generated(), report.errors());
    Ok(())
}
```

A missing `assets/logo.png` is the one fatal error: the batch never starts
and no output file is written. Any failure on a single size (corrupt source,
permissions, disk full) is recorded in the report and the remaining sizes are
still attempted.

Resize a single file
--------------------
```rust,no_run
use std::path::Path;
use logogen::resize_logo;

fn main() -> logogen::Result<()> {
    resize_logo(Path::new("assets/logo.png"), Path::new("assets/logo-48.png"), 48)
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — the size table (`LOGO_SIZES`) and shared constants.
- [`core`] — low-level locate/resize/save primitives.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use api::{BatchReport, ItemOutcome, generate_logo_assets, resize_logo};
pub use error::{Error, Result};
pub use types::{DEFAULT_ASSETS_DIR, LOGO_SIZES, SOURCE_LOGO, SizeSpec};
