//! Core library for jvmprep.
//!
//! Everything here is a leaf the release pipeline is built from: the static
//! platform matrix, packaging-tree path and URL helpers, and the filesystem,
//! subprocess, git, download, and archive side effects. Each action that
//! touches the filesystem or the network first echoes its shell equivalent to
//! stdout so an operator can see exactly which step failed and replay it by
//! hand.

pub mod archive;
pub mod download;
pub mod fsops;
pub mod git;
pub mod layout;
pub mod platform;
pub mod process;

pub use platform::{Arch, Flavor, NATIVE_TARGETS, Os, PlatformTarget};

/// User Agent string for artifact downloads
pub const USER_AGENT: &str = concat!("jvmprep/", env!("CARGO_PKG_VERSION"));
