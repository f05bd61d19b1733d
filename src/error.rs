//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec, and resizer errors, and provides semantic
//! variants for the fatal missing-source precondition and argument validation.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Pixel buffer error: {0}")]
    Buffer(#[from] fast_image_resize::ImageBufferError),

    #[error("{} not found!", path.display())]
    SourceMissing { path: PathBuf },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Processing error: {0}")]
    Processing(String),
}
