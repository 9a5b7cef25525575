//! docvet - document vetting
//!
//! Validates that an uploaded file path is safe to touch, reads the file with
//! an encoding fallback, and summarizes it into a JSON-serializable report.
//! The path validator is the part carrying a real security contract:
//!
//! - traversal out of the configured base directory is rejected
//! - symlinks are rejected
//! - only regular files with an allow-listed extension are accepted
//! - files over the size cap (10 MB by default) are rejected
//!
//! # Core Modules
//!
//! - [`analyzer`] - the validate → read → summarize pipeline and report types
//! - [`config`] - explicit [`AnalyzerConfig`] (no process-global state)
//! - [`core`] - the [`AnalyzeError`] type
//! - [`cli`] - the `docvet` command-line interface
//! - [`constants`] - default cap, allow-list, and preview length
//!
//! # Example
//!
//! ```rust,no_run
//! use docvet::analyzer::analyze_document;
//! use docvet::config::AnalyzerConfig;
//! use std::path::Path;
//!
//! let config = AnalyzerConfig::new("/srv/uploads");
//! let report = analyze_document(Path::new("/srv/uploads/notes.txt"), &config);
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! ```
//!
//! Errors are data: `analyze_document` always returns a report, and callers
//! check its `status` tag before trusting the metadata.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;

pub use analyzer::{AnalysisReport, DocumentMetadata, analyze_document};
pub use config::AnalyzerConfig;
pub use core::AnalyzeError;
