//! Path validation - the security core of docvet.
//!
//! Every document passes through [`validate_document_path`] before anything
//! reads it. The checks run in a fixed order and validation stops at the
//! first failure, so the reported reason is always the earliest one:
//!
//! 1. both the candidate path and the base directory resolve to canonical
//!    absolute form (no existence required yet)
//! 2. the canonical path stays inside the canonical base directory
//! 3. the path exists
//! 4. the path is not a symlink
//! 5. the path is a regular file
//! 6. the extension is on the allow-list (case-insensitive)
//! 7. the file is within the size cap
//!
//! Canonicalization uses [`soft_canonicalize`], which resolves `..`
//! components and symlinked ancestors even when the leaf does not exist.
//! That matters for ordering: a nonexistent path that would land outside the
//! base directory must still be reported as outside, not as missing.

use std::fs;
use std::path::{Path, PathBuf};

use soft_canonicalize::soft_canonicalize;
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::core::AnalyzeError;

/// A path that has passed all safety checks, plus the stat captured while
/// checking it. Holding the stat keeps the metadata extractor infallible and
/// avoids a second `stat` call.
#[derive(Debug)]
pub struct ValidatedDocument {
    /// Canonical absolute path to the document.
    pub path: PathBuf,
    /// Filesystem metadata captured during validation.
    pub stat: fs::Metadata,
}

/// Validates that `file_path` is safe to read under `config`.
///
/// Returns the canonical path and its stat on success. No side effects; the
/// filesystem is only inspected, never modified.
///
/// # Errors
///
/// Returns the first failing check as an [`AnalyzeError`]; see the module
/// docs for the order.
pub fn validate_document_path(
    file_path: &Path,
    config: &AnalyzerConfig,
) -> Result<ValidatedDocument, AnalyzeError> {
    let path = soft_canonicalize(file_path)
        .map_err(|e| AnalyzeError::InvalidPath(e.to_string()))?;
    let base = soft_canonicalize(&config.base_dir)
        .map_err(|e| AnalyzeError::InvalidPath(e.to_string()))?;

    if !path.starts_with(&base) {
        debug!(path = %path.display(), base = %base.display(), "path escapes base directory");
        return Err(AnalyzeError::OutsideBaseDirectory);
    }

    if !path.exists() {
        return Err(AnalyzeError::FileNotFound);
    }

    // Canonicalization resolves the final component, so the symlink check
    // must look at the unresolved input path.
    let is_symlink = fs::symlink_metadata(file_path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if is_symlink {
        debug!(path = %file_path.display(), "rejecting symlink");
        return Err(AnalyzeError::SymlinkDenied);
    }

    let stat = fs::metadata(&path).map_err(|e| AnalyzeError::InvalidPath(e.to_string()))?;
    if !stat.is_file() {
        return Err(AnalyzeError::NotARegularFile);
    }

    if !has_allowed_extension(&path, &config.allowed_extensions) {
        return Err(AnalyzeError::ExtensionDenied {
            allowed: config.allowed_extensions_display(),
        });
    }

    if stat.len() > config.max_file_size {
        debug!(size = stat.len(), cap = config.max_file_size, "file over size cap");
        return Err(AnalyzeError::FileTooLarge { max_mb: config.max_file_size_mb() });
    }

    debug!(path = %path.display(), size = stat.len(), "path validated");
    Ok(ValidatedDocument { path, stat })
}

/// Case-insensitive extension check against a dotted, lowercase allow-list.
fn has_allowed_extension(path: &Path, allowed: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let dotted = format!(".{}", ext.to_lowercase());
            allowed.iter().any(|a| *a == dotted)
        })
}
