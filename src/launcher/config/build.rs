use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_TOOLCHAIN: &str = "go";
pub const DEFAULT_ARTIFACT_PATH: &str = "./bin/src";
pub const DEFAULT_OUTPUT_DIR: &str = "bin/";
pub const DEFAULT_LDFLAGS: &str = "-s -w";
pub const DEFAULT_BUILD_TARGET: &str = "./src/...";

/// Build gate settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSection {
    /// Compiler executable, looked up on `PATH` when not absolute.
    pub toolchain: PathBuf,
    /// Executable started after the gate.
    pub artifact_path: PathBuf,
    pub output_dir: String,
    /// Linker flags; the default strips the symbol table and DWARF data.
    pub ldflags: String,
    pub target: String,
}

impl Default for BuildSection {
    fn default() -> Self {
        parse_build_section(None)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawBuildSection {
    pub toolchain: Option<PathBuf>,
    pub artifact_path: Option<PathBuf>,
    pub output_dir: Option<String>,
    pub ldflags: Option<String>,
    pub target: Option<String>,
}

pub fn parse_build_section(raw: Option<RawBuildSection>) -> BuildSection {
    let raw = raw.unwrap_or_default();
    BuildSection {
        toolchain: raw
            .toolchain
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOOLCHAIN)),
        artifact_path: raw
            .artifact_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT_PATH)),
        output_dir: raw
            .output_dir
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
        ldflags: raw.ldflags.unwrap_or_else(|| DEFAULT_LDFLAGS.to_string()),
        target: raw
            .target
            .unwrap_or_else(|| DEFAULT_BUILD_TARGET.to_string()),
    }
}
