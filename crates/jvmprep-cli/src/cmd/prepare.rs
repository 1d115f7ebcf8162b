//! The release preparation pipeline.
//!
//! Strictly ordered phases over the `jvm-packages/` tree; any failure is
//! terminal and surfaces through `main` as a non-zero exit. Nothing is
//! retried and nothing already staged is rolled back; rerunning the tool
//! overwrites previous output.

use std::path::Path;

use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;

use jvmprep_core::fsops::{self, Cwd, normpath};
use jvmprep_core::git::ReleaseContext;
use jvmprep_core::platform::{Flavor, GPU_TARGET, NATIVE_TARGETS};
use jvmprep_core::{archive, download, layout, process};

/// External locations and programs the pipeline talks to. Defaults reproduce
/// the production stores; tests point them at fakes.
#[derive(Debug)]
pub struct PrepareOpts<'a> {
    /// Repository checkout root containing `jvm-packages/`.
    pub packaging_root: &'a Path,
    /// Base URL of the nightly CI artifact bucket.
    pub nightly_url: &'a str,
    /// Base URL of the release Maven repository.
    pub maven_url: &'a str,
    /// Python interpreter for the fixture-generation scripts.
    pub python: &'a str,
}

/// Run every phase of the pipeline in order.
pub fn prepare(ctx: &ReleaseContext, opts: &PrepareOpts<'_>) -> Result<()> {
    tracing::debug!(
        version = %ctx.version,
        commit = %ctx.commit,
        branch = %ctx.branch,
        "starting release preparation"
    );
    let packages_dir = opts.packaging_root.join("jvm-packages");
    let _workdir = Cwd::push(&packages_dir)
        .with_context(|| format!("entering {}", packages_dir.display()))?;

    let client = Client::new();

    copy_tracker()?;
    stage_test_fixtures(opts.python)?;
    create_native_dirs()?;
    download_nightlies(&client, opts.nightly_url, ctx)?;
    stage_gpu_binary(&client, opts.maven_url, &ctx.version)?;

    Ok(())
}

/// Copy the pure-Python tracker script into both flavors' resource trees.
fn copy_tracker() -> Result<()> {
    println!("====copying pure-Python tracker====");
    let tracker = normpath("../python-package/xgboost/tracker.py");
    for flavor in Flavor::ALL {
        fsops::cp(&tracker, &layout::main_resources(flavor))
            .context("copying tracker script")?;
    }
    Ok(())
}

/// Generate the regression fixtures, then copy them and the sample data into
/// the four test resource trees.
fn stage_test_fixtures(python: &str) -> Result<()> {
    println!("====copying resources for testing====");
    {
        let regression_dir = normpath("../demo/CLI/regression");
        let _workdir = Cwd::push(&regression_dir)
            .with_context(|| format!("entering {}", regression_dir.display()))?;
        process::run(python, &["mapfeat.py"], None).context("generating feature map")?;
        process::run(python, &["mknfold.py", "machine.txt", "1"], None)
            .context("generating train/test folds")?;
    }

    for flavor in Flavor::ALL {
        let core_resources = layout::test_resources(flavor);
        let spark_resources = layout::spark_test_resources(flavor);
        fsops::ensure_dir(&core_resources)?;
        fsops::ensure_dir(&spark_resources)?;

        for file in matching_files("../demo/data/agaricus.*")? {
            fsops::cp(&file, &core_resources)?;
            fsops::cp(&file, &spark_resources)?;
        }
        for file in matching_files("../demo/CLI/regression/machine.txt.t*")? {
            fsops::cp(&file, &spark_resources)?;
        }
    }
    Ok(())
}

/// Expand a glob pattern relative to the current directory.
fn matching_files(pattern: &str) -> Result<Vec<std::path::PathBuf>> {
    let paths = glob::glob(pattern)
        .with_context(|| format!("bad glob pattern: {pattern}"))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("expanding {pattern}"))?;
    Ok(paths)
}

/// Create the destination directory of every platform target before anything
/// is copied or downloaded into it.
fn create_native_dirs() -> Result<()> {
    println!("====Creating directories to hold native binaries====");
    for target in &NATIVE_TARGETS {
        fsops::ensure_dir(&layout::native_lib_dir(target))
            .with_context(|| format!("creating native dir for {target}"))?;
    }
    Ok(())
}

/// Download each CPU target's nightly binary, keyed by branch and commit.
fn download_nightlies(client: &Client, nightly_url: &str, ctx: &ReleaseContext) -> Result<()> {
    println!("====Downloading native binaries from CI====");
    for target in &NATIVE_TARGETS {
        let Some(artifact) = target.nightly_artifact(&ctx.commit) else {
            continue;
        };
        let url = layout::nightly_url(nightly_url, &ctx.branch, &artifact);
        let dest = layout::native_lib_dir(target).join(target.installed_name());
        download::fetch(client, &url, &dest)
            .with_context(|| format!("downloading nightly binary for {target}"))?;
    }
    Ok(())
}

/// Recover the GPU native binary from the previously published jar.
///
/// The jar is fetched into a temporary directory which is removed on every
/// exit path, success or failure.
fn stage_gpu_binary(client: &Client, maven_url: &str, version: &str) -> Result<()> {
    let tempdir = tempfile::tempdir().context("creating temporary directory")?;
    let jar_path = tempdir.path().join("xgboost4j-gpu_2.12.jar");
    let jar_url = layout::gpu_jar_url(maven_url, version);
    download::fetch(client, &jar_url, &jar_path)
        .context("downloading published GPU jar")?;

    let extract_dir = tempdir.path().join("xgboost4j-gpu");
    archive::extract_zip(&jar_path, &extract_dir).context("extracting published GPU jar")?;

    let native = extract_dir.join(normpath(layout::GPU_JAR_ENTRY));
    if !native.is_file() {
        bail!(
            "published jar {} does not contain {}",
            jar_url,
            layout::GPU_JAR_ENTRY
        );
    }
    fsops::cp(&native, &layout::native_lib_dir(&GPU_TARGET))
        .context("installing GPU native binary")?;
    Ok(())
}
