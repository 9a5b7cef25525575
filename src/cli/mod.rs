//! Command-line interface for docvet.
//!
//! Two subcommands:
//! - `analyze` - vet a document and print its report as JSON
//! - `demo` - write a sample document and analyze it
//!
//! Global `--verbose`/`--quiet` flags pick the default tracing filter;
//! `RUST_LOG` overrides both when set.

mod analyze;
mod demo;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Top-level CLI parser.
#[derive(Parser)]
#[command(
    name = "docvet",
    about = "Validate and analyze a single uploaded document",
    version,
    long_about = "docvet checks that a file path is safe (no traversal, no symlinks, \
                  allow-listed extension, bounded size), reads the file with an encoding \
                  fallback, and prints a JSON analysis report."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a document and print its analysis report as JSON
    Analyze(analyze::AnalyzeCommand),
    /// Write a sample document and print its analysis report
    Demo(demo::DemoCommand),
}

impl Cli {
    /// Initializes logging and runs the selected subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error for setup failures (unreadable working directory,
    /// unwritable demo file). A document that fails vetting is not an error
    /// here: it becomes an error-status report on stdout.
    pub fn execute(self) -> Result<()> {
        self.init_logging();
        match self.command {
            Commands::Analyze(cmd) => cmd.execute(),
            Commands::Demo(cmd) => cmd.execute(),
        }
    }

    fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if self.verbose {
            EnvFilter::new("debug")
        } else if self.quiet {
            EnvFilter::new("error")
        } else {
            EnvFilter::new("warn")
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    }
}
