//! High-level, ergonomic library API: resize the source logo to a single output
//! file, or run the full fixed-size batch against an assets directory. Prefer
//! these entrypoints over the low-level `core` modules when embedding LOGOGEN.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::locate::locate_source;
use crate::core::resize::resize_to_square;
use crate::core::save::write_optimized_png;
use crate::error::Result;
use crate::types::LOGO_SIZES;

/// Outcome of one batch entry.
#[derive(Debug)]
pub struct ItemOutcome {
    pub output: PathBuf,
    pub size: u32,
    pub result: Result<()>,
}

/// Per-item outcomes of a full batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub items: Vec<ItemOutcome>,
}

impl BatchReport {
    pub fn generated(&self) -> usize {
        self.items.iter().filter(|item| item.result.is_ok()).count()
    }

    pub fn errors(&self) -> usize {
        self.items.len() - self.generated()
    }
}

/// Resize the source image to a square `size`x`size` optimized PNG at `output`.
///
/// The source is opened, resampled, and saved within this call; no handle
/// outlives it. An existing file at `output` is overwritten.
pub fn resize_logo(source: &Path, output: &Path, size: u32) -> Result<()> {
    let img = image::open(source)?;
    let resized = resize_to_square(&img, size)?;
    write_optimized_png(output, &resized)
}

/// Run the full fixed-size batch against `assets_dir`.
///
/// Fails fast with [`Error::SourceMissing`](crate::Error::SourceMissing) when
/// `<assets_dir>/logo.png` is absent; otherwise every entry of
/// [`LOGO_SIZES`] is attempted in declaration order, and a failed entry never
/// aborts the remaining ones.
pub fn generate_logo_assets(assets_dir: &Path) -> Result<BatchReport> {
    let source = locate_source(assets_dir)?;

    let mut report = BatchReport::default();
    for spec in LOGO_SIZES {
        let output = assets_dir.join(spec.filename);
        let result = resize_logo(&source, &output, spec.size);
        match &result {
            Ok(()) => info!("Generated {}", output.display()),
            Err(e) => warn!("Error generating {}: {}", output.display(), e),
        }
        report.items.push(ItemOutcome {
            output,
            size: spec.size,
            result,
        });
    }
    Ok(report)
}
