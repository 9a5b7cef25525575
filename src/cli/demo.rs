use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::analyzer::analyze_document;
use crate::config::AnalyzerConfig;

const SAMPLE_NAME: &str = "sample_document.txt";
const SAMPLE_CONTENTS: &str = "Sample document for docvet testing.\nThis is line 2.";

/// Arguments for `docvet demo`.
///
/// Writes a small sample document and prints its analysis, demonstrating the
/// full pipeline end to end.
#[derive(Args)]
pub struct DemoCommand {
    /// Directory to write the sample document into. Defaults to the current
    /// working directory.
    #[arg(long)]
    dir: Option<PathBuf>,
}

impl DemoCommand {
    pub fn execute(self) -> Result<()> {
        let dir = match self.dir {
            Some(dir) => dir,
            None => std::env::current_dir().context("failed to determine the working directory")?,
        };

        let sample = dir.join(SAMPLE_NAME);
        fs::write(&sample, SAMPLE_CONTENTS)
            .with_context(|| format!("failed to write sample document {}", sample.display()))?;

        let report = analyze_document(&sample, &AnalyzerConfig::new(&dir));
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}
