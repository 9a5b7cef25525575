//! Document analysis pipeline.
//!
//! [`analyze_document`] composes the three stages in sequence, stopping at
//! the first failure:
//!
//! 1. [`validation`] - path safety checks (the security core)
//! 2. [`reader`] - content reading with encoding fallback
//! 3. [`metadata`] - counts and timestamps
//!
//! The result is an [`AnalysisReport`], a serde-tagged success/error variant
//! that serializes to the JSON shape consumed by callers:
//!
//! ```json
//! {
//!   "status": "success",
//!   "file_path": "notes.txt",
//!   "metadata": { "...": "..." },
//!   "content_preview": "...",
//!   "analyzed_at": "2026-08-23T12:00:00Z"
//! }
//! ```
//!
//! Failures are data, not panics or `Err` values: callers must check
//! `status` before trusting `metadata`.

pub mod metadata;
pub mod reader;
pub mod validation;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::AnalyzerConfig;
use crate::constants::PREVIEW_MAX_CHARS;
use crate::core::AnalyzeError;

pub use metadata::{DocumentMetadata, extract_metadata};
pub use reader::read_document;
pub use validation::{ValidatedDocument, validate_document_path};

/// Outcome of analyzing a single document.
///
/// Serializes with a `status` tag of `"success"` or `"error"`. Both variants
/// echo the caller-supplied `file_path`; the canonical path stays internal.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisReport {
    Success {
        file_path: String,
        metadata: DocumentMetadata,
        /// Prefix of the contents, at most 500 characters.
        content_preview: String,
        analyzed_at: DateTime<Utc>,
    },
    Error {
        error: String,
        file_path: String,
    },
}

impl AnalysisReport {
    /// Whether this report carries metadata.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Validates, reads, and summarizes a single document.
///
/// Never fails: every error surfaces as an error-status report carrying the
/// message of the first failed check.
#[instrument(skip(config), fields(base_dir = %config.base_dir.display()))]
pub fn analyze_document(file_path: &Path, config: &AnalyzerConfig) -> AnalysisReport {
    match analyze_inner(file_path, config) {
        Ok(report) => report,
        Err(err) => {
            debug!(error = %err, "analysis failed");
            AnalysisReport::Error {
                error: err.to_string(),
                file_path: file_path.display().to_string(),
            }
        }
    }
}

fn analyze_inner(
    file_path: &Path,
    config: &AnalyzerConfig,
) -> Result<AnalysisReport, AnalyzeError> {
    let doc = validate_document_path(file_path, config)?;
    let contents = read_document(&doc.path)?;
    let metadata = extract_metadata(&doc, &contents);

    Ok(AnalysisReport::Success {
        file_path: file_path.display().to_string(),
        metadata,
        content_preview: preview(&contents),
        analyzed_at: Utc::now(),
    })
}

/// Truncates contents to the preview length on a character boundary.
fn preview(contents: &str) -> String {
    contents.chars().take(PREVIEW_MAX_CHARS).collect()
}
