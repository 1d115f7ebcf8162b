//! Filesystem actions, each echoed as its shell equivalent before it runs.
//!
//! The pipeline narrates itself as the sequence of `cp` / `mkdir -p` / `cd`
//! commands an operator would have typed, so a failure in any later phase can
//! be diagnosed and replayed by hand.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Normalize a forward-slash path to the host's native separators.
///
/// Preserves the absolute/relative distinction and is idempotent on paths
/// that are already native.
pub fn normpath(path: &str) -> PathBuf {
    let mut out = if path.starts_with('/') {
        PathBuf::from(std::path::MAIN_SEPARATOR_STR)
    } else {
        PathBuf::new()
    };
    for part in path.split('/').filter(|p| !p.is_empty()) {
        out.push(part);
    }
    out
}

/// Recursively create `path` and any missing parents.
///
/// Succeeds silently when the directory already exists; any other failure
/// (permissions, a file occupying the path) propagates.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    println!("mkdir -p {}", path.display());
    fs::create_dir_all(path)
}

/// Copy `source` to `target`, overwriting. `target` may be an existing
/// directory, in which case the source filename is kept.
///
/// Fails without creating anything when `source` does not exist.
pub fn cp(source: &Path, target: &Path) -> io::Result<()> {
    println!("cp {} {}", source.display(), target.display());
    let dest = if target.is_dir() {
        let name = source.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("source has no filename: {}", source.display()),
            )
        })?;
        target.join(name)
    } else {
        target.to_path_buf()
    };
    fs::copy(source, &dest)?;
    Ok(())
}

/// RAII working-directory guard.
///
/// Enters `path` on construction and restores the previous working directory
/// when dropped, on every exit path including unwinding.
#[derive(Debug)]
pub struct Cwd {
    previous: PathBuf,
}

impl Cwd {
    /// Change into `path`, echoing `cd <path>` first.
    pub fn push(path: &Path) -> io::Result<Self> {
        let previous = std::env::current_dir()?;
        println!("cd {}", path.display());
        std::env::set_current_dir(path)?;
        Ok(Self { previous })
    }
}

impl Drop for Cwd {
    fn drop(&mut self) {
        if let Err(err) = std::env::set_current_dir(&self.previous) {
            tracing::warn!("failed to restore working directory: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // Cwd mutates process-global state; serialize the tests that touch it.
    fn cwd_lock() -> MutexGuard<'static, ()> {
        static LOCK: Mutex<()> = Mutex::new(());
        LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[test]
    fn normpath_preserves_relative_and_absolute() {
        assert!(!normpath("a/b/c").is_absolute());
        assert!(normpath("/a/b/c").is_absolute());
    }

    #[test]
    fn normpath_is_idempotent() {
        let once = normpath("demo/CLI/regression");
        let twice = normpath(&once.display().to_string());
        assert_eq!(once, twice);

        let abs_once = normpath("/usr/local/lib");
        let abs_twice = normpath(&abs_once.display().to_string());
        assert_eq!(abs_once, abs_twice);
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a/b/c");
        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn ensure_dir_fails_on_file_collision() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("occupied");
        fs::write(&file, b"x").unwrap();
        assert!(ensure_dir(&file).is_err());
    }

    #[test]
    fn cp_into_directory_keeps_filename_and_content() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("tracker.py");
        fs::write(&src, b"print('ok')").unwrap();
        let dest_dir = tmp.path().join("resources");
        fs::create_dir(&dest_dir).unwrap();

        cp(&src, &dest_dir).unwrap();

        let copied = fs::read(dest_dir.join("tracker.py")).unwrap();
        assert_eq!(copied, b"print('ok')");
    }

    #[test]
    fn cp_overwrites_existing_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("new");
        let dst = tmp.path().join("old");
        fs::write(&src, b"new contents").unwrap();
        fs::write(&dst, b"old contents").unwrap();

        cp(&src, &dst).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), b"new contents");
    }

    #[test]
    fn cp_missing_source_fails_without_creating_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("missing");
        let dst = tmp.path().join("never-created");

        assert!(cp(&src, &dst).is_err());
        assert!(!dst.exists());
    }

    #[test]
    fn cwd_guard_restores_on_drop() {
        let _serial = cwd_lock();
        let tmp = tempfile::tempdir().unwrap();
        let before = std::env::current_dir().unwrap();
        {
            let _guard = Cwd::push(tmp.path()).unwrap();
            let inside = std::env::current_dir().unwrap();
            assert_eq!(inside, tmp.path().canonicalize().unwrap());
        }
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn cwd_guards_nest() {
        let _serial = cwd_lock();
        let tmp = tempfile::tempdir().unwrap();
        let inner_dir = tmp.path().join("inner");
        fs::create_dir(&inner_dir).unwrap();
        let before = std::env::current_dir().unwrap();
        {
            let _outer = Cwd::push(tmp.path()).unwrap();
            {
                let _inner = Cwd::push(Path::new("inner")).unwrap();
                assert!(std::env::current_dir().unwrap().ends_with("inner"));
            }
            assert_eq!(
                std::env::current_dir().unwrap(),
                tmp.path().canonicalize().unwrap()
            );
        }
        assert_eq!(std::env::current_dir().unwrap(), before);
    }
}
