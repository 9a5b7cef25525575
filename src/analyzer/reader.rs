//! Document content reading with encoding fallback.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::core::AnalyzeError;

/// Reads a document into a `String`, never failing on encoding.
///
/// The bytes are decoded as UTF-8 when possible. Otherwise they are decoded
/// as Latin-1, which maps every byte to the Unicode code point of the same
/// value and therefore always succeeds. This mirrors the common "utf-8 with
/// latin-1 fallback" upload convention; the WHATWG `windows-1252` decoder is
/// deliberately not used because it remaps bytes 0x80-0x9F.
///
/// # Errors
///
/// Returns [`AnalyzeError::ReadFailed`] only for I/O failures (permissions,
/// disappearing file); decoding itself cannot fail.
pub fn read_document(path: &Path) -> Result<String, AnalyzeError> {
    let bytes = fs::read(path).map_err(|e| AnalyzeError::ReadFailed(e.to_string()))?;
    match String::from_utf8(bytes) {
        Ok(contents) => Ok(contents),
        Err(err) => {
            warn!(path = %path.display(), "contents are not valid UTF-8, decoding as Latin-1");
            Ok(encoding_rs::mem::decode_latin1(err.as_bytes()).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_reads_utf8() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("utf8.txt");
        fs::write(&file, "héllo wörld").unwrap();

        assert_eq!(read_document(&file).unwrap(), "héllo wörld");
    }

    #[test]
    fn test_falls_back_to_latin1() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("legacy.txt");
        // 0xE9 is 'é' in Latin-1 but an invalid UTF-8 continuation start.
        fs::write(&file, b"caf\xe9").unwrap();

        assert_eq!(read_document(&file).unwrap(), "café");
    }

    #[test]
    fn test_latin1_fallback_is_byte_preserving() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("bytes.txt");
        // 0x80-0x9F must map to U+0080-U+009F, not the windows-1252 remaps.
        fs::write(&file, b"\x80\x9f\xff").unwrap();

        assert_eq!(read_document(&file).unwrap(), "\u{80}\u{9f}\u{ff}");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp = tempdir().unwrap();
        let err = read_document(&temp.path().join("gone.txt")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read file:"));
    }
}
