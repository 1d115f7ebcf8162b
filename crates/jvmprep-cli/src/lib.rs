//! jvmprep - stage XGBoost JVM release artifacts
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Prepares the `jvm-packages/` tree of an XGBoost release checkout for
//! publishing: stages the Python tracker script and test fixtures, scaffolds
//! the per-platform native library directories, pulls the nightly CI binaries
//! for the current release branch and commit, recovers the GPU binary from
//! the previously published jar, and prints the remaining manual publishing
//! steps.
//!
//! The run is strictly sequential and fail-fast: the first error aborts the
//! whole pipeline with a non-zero exit. Reruns are safe; directories are
//! created idempotently and files are overwritten.

pub mod cmd;
pub mod runbook;

use clap::Parser;
use std::path::PathBuf;

use jvmprep_core::layout;

#[derive(Debug, Parser)]
#[command(name = "jvmprep")]
#[command(author, version, about = "Stage XGBoost JVM release artifacts for publishing")]
pub struct Cli {
    /// Version of the release being prepared (e.g. 1.7.0)
    #[arg(long)]
    pub release_version: String,

    /// Repository checkout root containing jvm-packages/
    #[arg(long, default_value = ".")]
    pub packaging_root: PathBuf,

    /// Base URL of the nightly CI artifact bucket
    #[arg(
        long,
        env = "JVMPREP_NIGHTLY_URL",
        default_value = layout::NIGHTLY_BUCKET_URL
    )]
    pub nightly_url: String,

    /// Base URL of the release Maven repository
    #[arg(long, env = "JVMPREP_MAVEN_URL", default_value = layout::MAVEN_REPO_URL)]
    pub maven_url: String,

    /// Python interpreter used to run the fixture-generation scripts
    #[arg(long, default_value = "python3")]
    pub python: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_version_is_required() {
        assert!(Cli::try_parse_from(["jvmprep"]).is_err());
    }

    #[test]
    fn defaults_point_at_the_production_stores() {
        let cli = Cli::try_parse_from(["jvmprep", "--release-version", "1.7.0"]).unwrap();
        assert_eq!(cli.release_version, "1.7.0");
        assert_eq!(cli.nightly_url, layout::NIGHTLY_BUCKET_URL);
        assert_eq!(cli.maven_url, layout::MAVEN_REPO_URL);
        assert_eq!(cli.python, "python3");
        assert_eq!(cli.packaging_root, PathBuf::from("."));
    }
}
