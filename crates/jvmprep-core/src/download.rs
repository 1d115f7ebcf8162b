//! Blocking artifact downloads.
//!
//! The pipeline is strictly sequential, so downloads block the calling thread
//! and stream straight to the destination file. There is no retry or backoff;
//! a failed transfer aborts the run and the operator re-runs the tool.

use std::fs::File;
use std::io;
use std::path::Path;

use reqwest::blocking::Client;
use thiserror::Error;

/// A transfer failed or the response body could not be written out.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network failure or non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The destination file could not be created or written.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Download `url` to `dest`, overwriting any existing file.
///
/// Echoes `URL -> destination` before transferring. Non-success HTTP statuses
/// are errors, not empty files.
pub fn fetch(client: &Client, url: &str, dest: &Path) -> Result<(), FetchError> {
    println!("{url} -> {}", dest.display());

    let mut response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
        .send()?
        .error_for_status()?;

    let mut file = File::create(dest)?;
    let bytes = response.copy_to(&mut file)?;
    tracing::debug!(url, bytes, "download complete");
    Ok(())
}
