//! The static matrix of platform targets that receive a native binary.
//!
//! Nightly CI publishes one binary per CPU target, with a filename keyed by
//! the commit hash. The GPU flavor ships no nightly artifact; its binary is
//! recovered from the previously published jar instead.

use std::fmt;

/// Operating system identifier as used in the packaging tree and in nightly
/// artifact filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    /// Linux (glibc builds)
    Linux,
    /// Windows (MSVC builds)
    Windows,
    /// macOS
    Macos,
}

impl Os {
    /// Directory name under `lib/` in the packaging tree.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::Macos => "macos",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CPU architecture identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    /// `x86_64` / amd64
    X86_64,
    /// ARM64
    Aarch64,
}

impl Arch {
    /// Directory name under `lib/<os>/` in the packaging tree.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Aarch64 => "aarch64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build flavor of the packaged library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Standard CPU build
    Cpu,
    /// CUDA-accelerated build
    Gpu,
}

impl Flavor {
    /// Both flavors, in the order the pipeline stages them.
    pub const ALL: [Self; 2] = [Self::Cpu, Self::Gpu];

    /// Core module directory for this flavor.
    pub fn module(self) -> &'static str {
        match self {
            Self::Cpu => "xgboost4j",
            Self::Gpu => "xgboost4j-gpu",
        }
    }

    /// Spark module directory for this flavor.
    pub fn spark_module(self) -> &'static str {
        match self {
            Self::Cpu => "xgboost4j-spark",
            Self::Gpu => "xgboost4j-spark-gpu",
        }
    }
}

/// One (os, arch, flavor) record of the native-binary matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformTarget {
    /// Operating system the binary is built for.
    pub os: Os,
    /// CPU architecture the binary is built for.
    pub arch: Arch,
    /// Build flavor the binary belongs to.
    pub flavor: Flavor,
}

/// The GPU build is published for Linux `x86_64` only.
pub const GPU_TARGET: PlatformTarget = PlatformTarget {
    os: Os::Linux,
    arch: Arch::X86_64,
    flavor: Flavor::Gpu,
};

/// Every platform target that receives a native binary. Consumed by both the
/// directory-creation and the download phases, in this order.
pub const NATIVE_TARGETS: [PlatformTarget; 6] = [
    PlatformTarget {
        os: Os::Linux,
        arch: Arch::X86_64,
        flavor: Flavor::Cpu,
    },
    PlatformTarget {
        os: Os::Linux,
        arch: Arch::Aarch64,
        flavor: Flavor::Cpu,
    },
    PlatformTarget {
        os: Os::Windows,
        arch: Arch::X86_64,
        flavor: Flavor::Cpu,
    },
    PlatformTarget {
        os: Os::Macos,
        arch: Arch::X86_64,
        flavor: Flavor::Cpu,
    },
    PlatformTarget {
        os: Os::Macos,
        arch: Arch::Aarch64,
        flavor: Flavor::Cpu,
    },
    GPU_TARGET,
];

impl PlatformTarget {
    /// Filename the binary is installed under in the packaging tree.
    pub fn installed_name(&self) -> &'static str {
        match self.os {
            Os::Windows => "xgboost4j.dll",
            Os::Linux => "libxgboost4j.so",
            Os::Macos => "libxgboost4j.dylib",
        }
    }

    /// Filename of the nightly CI artifact for this target, keyed by commit
    /// hash. Returns `None` for targets with no nightly artifact (the GPU
    /// binary ships inside the published jar instead).
    pub fn nightly_artifact(&self, commit: &str) -> Option<String> {
        if self.flavor == Flavor::Gpu {
            return None;
        }
        match (self.os, self.arch) {
            (Os::Windows, Arch::X86_64) => Some(format!("xgboost4j_{commit}.dll")),
            (Os::Linux, Arch::X86_64) => Some(format!("libxgboost4j_linux_x86_64_{commit}.so")),
            (Os::Linux, Arch::Aarch64) => Some(format!("libxgboost4j_linux_arm64_{commit}.so")),
            (Os::Macos, Arch::X86_64) => Some(format!("libxgboost4j_{commit}.dylib")),
            (Os::Macos, Arch::Aarch64) => Some(format!("libxgboost4j_m1_{commit}.dylib")),
            _ => None,
        }
    }
}

impl fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}
