//! Gallery sources on disk: reads a work page or a JSON manifest and hands
//! it to the matching extractor.

use std::fmt;
use std::path::{Path, PathBuf};

use super::extract::{ExtractError, ExtractedPage, extract_html, extract_manifest};

/// What: Failure to load a gallery source from disk.
///
/// Inputs: Produced by [`load_page`].
///
/// Output: Implements `Display`/`Error`; wraps the underlying cause.
#[derive(Debug)]
pub enum SourceError {
    /// The file could not be read.
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file was read but did not yield a usable gallery.
    Extract {
        /// Path that failed.
        path: PathBuf,
        /// Extraction failure.
        source: ExtractError,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Extract { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Extract { source, .. } => Some(source),
        }
    }
}

/// What: Read a work page or manifest and extract its records.
///
/// Inputs:
/// - `path`: `.json` files are read as manifests; anything else as HTML
///
/// Output:
/// - Extracted page, or the I/O or extraction failure tagged with the path.
pub fn load_page(path: &Path) -> Result<ExtractedPage, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_manifest = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let extracted = if is_manifest {
        extract_manifest(&content)
    } else {
        extract_html(&content)
    };
    let page = extracted.map_err(|source| SourceError::Extract {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        records = page.records.len(),
        manifest = is_manifest,
        "gallery source loaded"
    );
    Ok(page)
}
