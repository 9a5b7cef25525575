use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::analyzer::analyze_document;
use crate::config::AnalyzerConfig;

/// Arguments for `docvet analyze`.
#[derive(Args)]
pub struct AnalyzeCommand {
    /// Path of the document to analyze.
    path: PathBuf,

    /// Base directory the document must live under. Defaults to
    /// DOCVET_BASE_DIR, then the current working directory.
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Print the report as a single line instead of pretty JSON.
    #[arg(long)]
    compact: bool,
}

impl AnalyzeCommand {
    /// Runs the analysis and prints the report to stdout.
    ///
    /// The exit code stays 0 even for an error-status report: vetting
    /// failures are data for the caller, not CLI failures.
    pub fn execute(self) -> Result<()> {
        let config = match self.base_dir {
            Some(dir) => AnalyzerConfig::new(dir),
            None => AnalyzerConfig::from_env()
                .context("failed to determine the base directory")?,
        };

        let report = analyze_document(&self.path, &config);
        let json = if self.compact {
            serde_json::to_string(&report)?
        } else {
            serde_json::to_string_pretty(&report)?
        };
        println!("{json}");
        Ok(())
    }
}
