//! Manifest loading for the bundler.
//!
//! The manifest is a small TOML file listing the sketch's source files in
//! dependency order, plus the destination for the combined artifact.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Manifest file name looked up in the working directory when no
/// `--config` flag is given.
pub const DEFAULT_MANIFEST: &str = "sketchpack.toml";

fn default_output() -> PathBuf {
    PathBuf::from("combined_code.txt")
}

/// Bundler configuration, deserialized from the TOML manifest.
///
/// `files` is an ordered list and the order is load-bearing: a file must
/// not reference a symbol defined only in a file listed after it. The
/// bundler never reorders or deduplicates the list; keeping it in
/// dependency order is the operator's job when the sketch's file set
/// changes. Computing the order from the includes themselves is a known
/// limitation, deliberately out of scope.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Source files to combine, in dependency order, relative to the
    /// invocation working directory.
    pub files: Vec<PathBuf>,

    /// Destination path for the combined artifact.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Load and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest '{}'", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid manifest '{}'", path.display()))
    }
}
