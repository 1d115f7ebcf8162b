//! Paths and URLs of the JVM packaging tree.
//!
//! All paths are relative to the `jvm-packages/` directory the pipeline runs
//! inside. URL helpers interpolate the release context into the two external
//! stores: the nightly CI bucket and the release Maven repository.

use std::path::PathBuf;

use crate::fsops::normpath;
use crate::platform::{Flavor, PlatformTarget};

/// Default base URL of the nightly CI artifact bucket.
pub const NIGHTLY_BUCKET_URL: &str = "https://s3-us-west-2.amazonaws.com/xgboost-nightly-builds";

/// Default base URL of the release Maven repository.
pub const MAVEN_REPO_URL: &str =
    "https://s3-us-west-2.amazonaws.com/xgboost-maven-repo/release/ml/dmlc";

/// Path of the GPU native binary inside the published jar, forward-slash
/// separated as zip entries are.
pub const GPU_JAR_ENTRY: &str = "lib/linux/x86_64/libxgboost4j.so";

/// Main resource directory of a flavor's core module; receives the tracker
/// script.
pub fn main_resources(flavor: Flavor) -> PathBuf {
    normpath(&format!("{}/src/main/resources", flavor.module()))
}

/// Test resource directory of a flavor's core module.
pub fn test_resources(flavor: Flavor) -> PathBuf {
    normpath(&format!("{}/src/test/resources", flavor.module()))
}

/// Test resource directory of a flavor's Spark module.
pub fn spark_test_resources(flavor: Flavor) -> PathBuf {
    normpath(&format!("{}/src/test/resources", flavor.spark_module()))
}

/// Directory that receives the native binary for `target`.
pub fn native_lib_dir(target: &PlatformTarget) -> PathBuf {
    normpath(&format!(
        "{}/src/main/resources/lib/{}/{}",
        target.flavor.module(),
        target.os,
        target.arch
    ))
}

/// Nightly bucket URL of one CI artifact, keyed by branch name.
pub fn nightly_url(prefix: &str, branch: &str, artifact: &str) -> String {
    format!("{prefix}/{branch}/libxgboost4j/{artifact}")
}

/// Release Maven repository URL of the published GPU jar for `version`.
pub fn gpu_jar_url(prefix: &str, version: &str) -> String {
    format!("{prefix}/xgboost4j-gpu_2.12/{version}/xgboost4j-gpu_2.12-{version}.jar")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{GPU_TARGET, NATIVE_TARGETS};

    #[test]
    fn native_lib_dirs_are_distinct_per_target() {
        let dirs: std::collections::HashSet<_> =
            NATIVE_TARGETS.iter().map(native_lib_dir).collect();
        assert_eq!(dirs.len(), NATIVE_TARGETS.len());
    }

    #[test]
    fn gpu_lib_dir_lives_under_the_gpu_module() {
        let dir = native_lib_dir(&GPU_TARGET);
        assert!(dir.starts_with("xgboost4j-gpu"));
        assert!(dir.ends_with(normpath("lib/linux/x86_64")));
    }

    #[test]
    fn nightly_url_places_branch_and_artifact() {
        let url = nightly_url(
            NIGHTLY_BUCKET_URL,
            "release_1.7.0",
            "libxgboost4j_linux_x86_64_abc123.so",
        );
        assert_eq!(
            url,
            "https://s3-us-west-2.amazonaws.com/xgboost-nightly-builds/release_1.7.0/libxgboost4j/libxgboost4j_linux_x86_64_abc123.so"
        );
    }

    #[test]
    fn gpu_jar_url_interpolates_the_version_twice() {
        let url = gpu_jar_url(MAVEN_REPO_URL, "1.7.0");
        assert!(url.ends_with("/xgboost4j-gpu_2.12/1.7.0/xgboost4j-gpu_2.12-1.7.0.jar"));
    }
}
