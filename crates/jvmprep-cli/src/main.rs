//! jvmprep - stage XGBoost JVM release artifacts

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jvmprep_cli::cmd::prepare::{self, PrepareOpts};
use jvmprep_cli::{Cli, runbook};
use jvmprep_core::git::ReleaseContext;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let ctx = ReleaseContext::resolve(&cli.release_version, &cli.packaging_root)
        .context("resolving release metadata from git")?;
    println!("Using commit {} of branch {}", ctx.commit, ctx.branch);

    prepare::prepare(
        &ctx,
        &PrepareOpts {
            packaging_root: &cli.packaging_root,
            nightly_url: &cli.nightly_url,
            maven_url: &cli.maven_url,
            python: &cli.python,
        },
    )?;

    runbook::print();
    Ok(())
}
