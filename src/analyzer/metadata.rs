//! Document metadata extraction.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::ValidatedDocument;

/// Metadata computed for a successfully analyzed document.
///
/// Timestamps serialize as RFC 3339 / ISO-8601 strings. Counting semantics:
/// `line_count` splits on `\n` (an empty document has one line),
/// `word_count` splits on Unicode whitespace, and `char_count` counts
/// Unicode scalar values rather than bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub filename: String,
    /// Lowercase extension with the leading dot, e.g. `".txt"`. Empty when
    /// the file has none (unreachable for validated documents).
    pub extension: String,
    pub size_bytes: u64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub line_count: usize,
    pub word_count: usize,
    pub char_count: usize,
}

/// Computes metadata for a validated document and its decoded contents.
///
/// Infallible: the stat was captured during validation, and on platforms or
/// filesystems without a creation timestamp the modification time stands in.
#[must_use]
pub fn extract_metadata(doc: &ValidatedDocument, contents: &str) -> DocumentMetadata {
    let modified_at = doc
        .stat
        .modified()
        .map_or_else(|_| Utc::now(), DateTime::<Utc>::from);
    let created_at = doc
        .stat
        .created()
        .map_or(modified_at, DateTime::<Utc>::from);

    DocumentMetadata {
        filename: file_name_of(&doc.path),
        extension: extension_of(&doc.path),
        size_bytes: doc.stat.len(),
        created_at,
        modified_at,
        line_count: contents.split('\n').count(),
        word_count: contents.split_whitespace().count(),
        char_count: contents.chars().count(),
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::validation::validate_document_path;
    use crate::config::AnalyzerConfig;
    use std::fs;
    use tempfile::tempdir;

    fn validated(dir: &Path, name: &str, contents: &[u8]) -> ValidatedDocument {
        let file = dir.join(name);
        fs::write(&file, contents).unwrap();
        validate_document_path(&file, &AnalyzerConfig::new(dir)).unwrap()
    }

    #[test]
    fn test_counts_hello_world() {
        let temp = tempdir().unwrap();
        let doc = validated(temp.path(), "hello.txt", b"hello\nworld");
        let contents = "hello\nworld";

        let meta = extract_metadata(&doc, contents);
        assert_eq!(meta.filename, "hello.txt");
        assert_eq!(meta.extension, ".txt");
        assert_eq!(meta.size_bytes, 11);
        assert_eq!(meta.line_count, 2);
        assert_eq!(meta.word_count, 2);
        assert_eq!(meta.char_count, 11);
    }

    #[test]
    fn test_empty_document_has_one_line() {
        let temp = tempdir().unwrap();
        let doc = validated(temp.path(), "empty.md", b"");

        let meta = extract_metadata(&doc, "");
        assert_eq!(meta.line_count, 1);
        assert_eq!(meta.word_count, 0);
        assert_eq!(meta.char_count, 0);
    }

    #[test]
    fn test_extension_lowercased() {
        let temp = tempdir().unwrap();
        let doc = validated(temp.path(), "SHOUT.TXT", b"hi");

        let meta = extract_metadata(&doc, "hi");
        assert_eq!(meta.extension, ".txt");
        assert_eq!(meta.filename, "SHOUT.TXT");
    }

    #[test]
    fn test_char_count_is_scalar_values() {
        let temp = tempdir().unwrap();
        let doc = validated(temp.path(), "uni.txt", "héllo".as_bytes());

        let meta = extract_metadata(&doc, "héllo");
        assert_eq!(meta.char_count, 5);
        assert_eq!(meta.size_bytes, 6);
    }

    #[test]
    fn test_timestamps_are_ordered_sanely() {
        let temp = tempdir().unwrap();
        let doc = validated(temp.path(), "t.txt", b"x");

        let meta = extract_metadata(&doc, "x");
        assert!(meta.created_at <= Utc::now());
        assert!(meta.modified_at <= Utc::now());
    }
}
