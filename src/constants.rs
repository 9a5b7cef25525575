//! Shared constants for document vetting.

/// Maximum size of a document accepted for analysis, in bytes (10 MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Extensions accepted for analysis, lowercase, with the leading dot.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".txt", ".md", ".pdf"];

/// Maximum length of the content preview, in Unicode scalar values.
pub const PREVIEW_MAX_CHARS: usize = 500;

/// Environment variable naming the default base directory.
pub const BASE_DIR_ENV: &str = "DOCVET_BASE_DIR";
