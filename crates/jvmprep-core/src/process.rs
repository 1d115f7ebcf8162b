//! Synchronous subprocess execution with fail-fast semantics.
//!
//! Commands are passed as argument vectors, never as shell strings, so there
//! are no quoting concerns. Output streams straight to the console.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// A subprocess could not be started or exited unsuccessfully.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The program could not be spawned at all (not found, not executable).
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        /// The rendered command line.
        command: String,
        /// The underlying spawn failure.
        source: io::Error,
    },

    /// The program ran but exited with a non-zero status.
    #[error("`{command}` exited with {status}")]
    NonZero {
        /// The rendered command line.
        command: String,
        /// The exit status reported by the OS.
        status: ExitStatus,
    },
}

/// Run `program` with `args`, streaming stdout/stderr to the console.
///
/// `cwd` overrides the working directory for the child only. The rendered
/// command line is echoed before execution; a non-zero exit is an error and
/// the caller is expected to abort, not retry.
pub fn run(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<(), ProcessError> {
    let rendered = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{rendered}");
    tracing::debug!(command = %rendered, "spawning subprocess");

    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let status = cmd.status().map_err(|source| ProcessError::Spawn {
        command: rendered.clone(),
        source,
    })?;

    if !status.success() {
        return Err(ProcessError::NonZero {
            command: rendered,
            status,
        });
    }
    Ok(())
}
