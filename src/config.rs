//! Analyzer configuration.
//!
//! The validator never consults process-global state: everything it needs is
//! carried by an explicit [`AnalyzerConfig`]. The `DOCVET_BASE_DIR`
//! environment variable is read in exactly one place,
//! [`AnalyzerConfig::from_env`], so tests and embedders can bypass it
//! entirely by constructing a config directly.

use std::env;
use std::path::PathBuf;

use crate::constants::{ALLOWED_EXTENSIONS, BASE_DIR_ENV, MAX_FILE_SIZE};

/// Settings governing which documents are accepted for analysis.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Directory outside which no file access is permitted.
    pub base_dir: PathBuf,

    /// Accepted file extensions, lowercase, with the leading dot.
    pub allowed_extensions: Vec<String>,

    /// Maximum accepted file size in bytes.
    pub max_file_size: u64,
}

impl AnalyzerConfig {
    /// Creates a config rooted at `base_dir` with the default extension
    /// allow-list and size cap.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(ToString::to_string).collect(),
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// Creates a config rooted at `DOCVET_BASE_DIR`, falling back to the
    /// current working directory when the variable is unset or empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset and the current working
    /// directory cannot be determined.
    pub fn from_env() -> std::io::Result<Self> {
        let base_dir = match env::var_os(BASE_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => env::current_dir()?,
        };
        Ok(Self::new(base_dir))
    }

    /// The size cap expressed in whole megabytes, for user-facing messages.
    #[must_use]
    pub const fn max_file_size_mb(&self) -> u64 {
        self.max_file_size / (1024 * 1024)
    }

    /// The extension allow-list as a comma-separated string, for user-facing
    /// messages.
    #[must_use]
    pub fn allowed_extensions_display(&self) -> String {
        self.allowed_extensions.join(", ")
    }
}
