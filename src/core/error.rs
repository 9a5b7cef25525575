//! Error handling for docvet.
//!
//! A single enumerated error type covers every way a document can fail
//! vetting. The `#[error]` display strings are the user-facing messages that
//! end up in the `error` field of an [`crate::analyzer::AnalysisReport`], so
//! they are written for end users rather than developers and must stay
//! stable: callers and tests match on them.
//!
//! # Error Categories
//!
//! - **Path safety**: [`AnalyzeError::InvalidPath`],
//!   [`AnalyzeError::OutsideBaseDirectory`], [`AnalyzeError::SymlinkDenied`]
//! - **File checks**: [`AnalyzeError::FileNotFound`],
//!   [`AnalyzeError::NotARegularFile`], [`AnalyzeError::ExtensionDenied`],
//!   [`AnalyzeError::FileTooLarge`]
//! - **I/O**: [`AnalyzeError::ReadFailed`]

use thiserror::Error;

/// All failure modes of document validation and reading.
///
/// The analysis pipeline stops at the first failing check, so a report never
/// carries more than one of these.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The candidate path or the base directory could not be resolved to a
    /// canonical absolute form.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// The resolved path escapes the configured base directory.
    #[error("Path outside allowed directory")]
    OutsideBaseDirectory,

    /// The resolved path does not exist on disk.
    #[error("File does not exist")]
    FileNotFound,

    /// The path names a symbolic link.
    #[error("Symlinks are not allowed")]
    SymlinkDenied,

    /// The path exists but is not a regular file (directory, socket, ...).
    #[error("Path is not a file")]
    NotARegularFile,

    /// The file extension is missing or not on the allow-list.
    #[error("Invalid file extension. Allowed: {allowed}")]
    ExtensionDenied {
        /// Comma-separated allow-list, e.g. `".txt, .md, .pdf"`.
        allowed: String,
    },

    /// The file exceeds the configured size cap.
    #[error("File too large. Max size: {max_mb} MB")]
    FileTooLarge {
        /// The cap, in whole megabytes.
        max_mb: u64,
    },

    /// Reading the file failed for a reason other than decoding (decoding
    /// itself never fails thanks to the Latin-1 fallback).
    #[error("Failed to read file: {0}")]
    ReadFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_stable() {
        assert_eq!(
            AnalyzeError::OutsideBaseDirectory.to_string(),
            "Path outside allowed directory"
        );
        assert_eq!(AnalyzeError::FileNotFound.to_string(), "File does not exist");
        assert_eq!(AnalyzeError::SymlinkDenied.to_string(), "Symlinks are not allowed");
        assert_eq!(AnalyzeError::NotARegularFile.to_string(), "Path is not a file");
        assert_eq!(
            AnalyzeError::FileTooLarge { max_mb: 10 }.to_string(),
            "File too large. Max size: 10 MB"
        );
        assert_eq!(
            AnalyzeError::ExtensionDenied { allowed: ".txt, .md, .pdf".into() }.to_string(),
            "Invalid file extension. Allowed: .txt, .md, .pdf"
        );
    }
}
