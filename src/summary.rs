use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// A source file and the canonical file it was written to
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub source: String,
    pub destination: String,
    pub records: usize,
}

/// Tally of a run over a directory tree.
#[derive(Serialize, Debug, Default)]
pub struct RunSummary {
    pub recasava_version: String,
    pub input: String,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub records: usize,
    pub conversions: Vec<Conversion>,
}

impl RunSummary {
    pub fn new(input: &Path) -> Self {
        RunSummary {
            recasava_version: crate::cli::VERSION.to_string(),
            input: input.display().to_string(),
            ..RunSummary::default()
        }
    }

    pub fn add_conversion(&mut self, source: &Path, destination: &Path, records: usize) {
        self.converted += 1;
        self.records += records;
        self.conversions.push(Conversion {
            source: source.display().to_string(),
            destination: destination.display().to_string(),
            records,
        });
    }

    /// One-line description for the log
    pub fn describe(&self) -> String {
        format!(
            "{} converted ({} reads), {} already single-indexed, {} failed",
            self.converted, self.records, self.skipped, self.failed
        )
    }

    /// Writes the summary as pretty-printed JSON.
    pub fn write_json(&self, output: &str) -> Result<()> {
        let file = std::fs::File::create(output)
            .with_context(|| format!("Unable to create summary file {output}"))?;
        serde_json::to_writer_pretty(file, self).context("Could not serialize summary")?;
        Ok(())
    }
}
