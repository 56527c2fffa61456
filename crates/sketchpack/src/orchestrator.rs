//! The bundle pipeline: read, annotate, neutralize, write.
//!
//! A single linear pass with no branching states, no retries, and no
//! concurrency. Every file read happens before the one output write, so a
//! read failure always aborts the run before any byte of output exists.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::{combine, config::Config, directives};

/// Drives the bundling pipeline over the manifest's ordered file list.
#[derive(Debug)]
pub struct BundleOrchestrator {
    config: Config,
}

impl BundleOrchestrator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Destination path the bundle will be written to.
    pub fn output(&self) -> &Path {
        &self.config.output
    }

    /// Produce the combined, neutralized bundle text without writing it.
    ///
    /// Files are read strictly in manifest order and the first unreadable
    /// entry (missing, unopenable, or not valid UTF-8) fails the whole run;
    /// there is no skip-and-continue mode. Each read is scoped, so a file's
    /// handle is closed before the next file is opened.
    pub fn bundle_to_string(&self) -> Result<String> {
        if self.config.files.is_empty() {
            warn!("manifest lists no files; producing an empty bundle");
        }
        info!("Combining {} source files", self.config.files.len());

        let mut bundle = String::new();
        for path in &self.config.files {
            debug!("Reading {}", path.display());
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read source file '{}'", path.display()))?;
            combine::push_segment(&mut bundle, path, &content);
        }

        Ok(directives::neutralize(&bundle))
    }

    /// Run the full pipeline and write the artifact, fully overwriting any
    /// prior content at the output path. On failure the prior content (if
    /// any) is left as-is, never guaranteed-deleted.
    pub fn bundle_to_file(&self) -> Result<()> {
        let text = self.bundle_to_string()?;
        let output = &self.config.output;
        fs::write(output, text)
            .with_context(|| format!("failed to write bundle to '{}'", output.display()))?;
        info!("Bundle written to {}", output.display());
        Ok(())
    }
}
