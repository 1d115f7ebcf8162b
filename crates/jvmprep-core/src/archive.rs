//! Zip archive extraction.
//!
//! Used once per run, to pull the GPU native binary out of a previously
//! published jar (jars are plain zip archives).

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use zip::ZipArchive;
use zip::result::ZipError;

/// Extraction failed.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The destination directory already exists; extracting would silently
    /// merge into it.
    #[error("extraction destination already exists: {0}")]
    DestinationExists(PathBuf),

    /// The archive is corrupt or not a zip file.
    #[error("archive error: {0}")]
    Zip(#[from] ZipError),

    /// The archive could not be opened or an entry could not be written.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Extract all entries of the zip `archive` into `dest`.
///
/// `dest` must not already exist; it is created here. This keeps every
/// extraction into a fresh tree and rules out silent merges with leftovers.
pub fn extract_zip(archive: &Path, dest: &Path) -> Result<(), ExtractError> {
    if dest.exists() {
        return Err(ExtractError::DestinationExists(dest.to_path_buf()));
    }
    std::fs::create_dir_all(dest)?;

    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(file)?;
    tracing::debug!(entries = zip.len(), "extracting {}", archive.display());
    zip.extract(dest)?;
    Ok(())
}
