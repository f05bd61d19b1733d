use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::types::SOURCE_LOGO;

/// Resolve the source logo inside `assets_dir`.
///
/// Joins the path explicitly instead of changing the working directory, so
/// the batch can run as a library call without process-wide state. Missing
/// source is the one fatal precondition: the batch must not start.
pub fn locate_source(assets_dir: &Path) -> Result<PathBuf> {
    let source = assets_dir.join(SOURCE_LOGO);
    if !source.is_file() {
        return Err(Error::SourceMissing { path: source });
    }
    info!("Source logo found: {}", source.display());
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = locate_source(dir.path()).unwrap_err();
        match err {
            Error::SourceMissing { path } => {
                assert!(path.ends_with("logo.png"));
            }
            other => panic!("expected SourceMissing, got {other}"),
        }
    }

    #[test]
    fn existing_source_resolves() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("logo.png"), b"not a real png").unwrap();
        let source = locate_source(dir.path()).unwrap();
        assert_eq!(source, dir.path().join("logo.png"));
    }
}
