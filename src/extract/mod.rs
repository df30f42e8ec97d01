//! Format-dispatched text extraction for disclosure attachments.
//!
//! Attachments arrive as raw bytes; the file kind is derived from the
//! filename-like part of the link (GPW hrefs carry a `,type=...` style
//! suffix after the real name) and selects one of the extractors below.

pub mod archive;
pub mod markup;
pub mod pdf;

use thiserror::Error;

/// How many levels of archive-in-archive are followed before giving up.
pub const MAX_ARCHIVE_DEPTH: usize = 4;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("archive unreadable: {0}")]
    Archive(String),

    #[error("archive nesting exceeds depth limit of {0}")]
    TooDeep(usize),
}

/// Closed classification of attachment payloads, derived from filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Pdf,
    Markup,
    Archive,
    Unknown,
}

impl FileKind {
    /// Derives the kind from any filename-bearing string: the last path
    /// segment is cut at the first comma, then classified by its trailing
    /// extension. `.xades` signature files and anything unrecognized map
    /// to `Unknown`. Pure, no I/O.
    pub fn from_name(name: &str) -> FileKind {
        let segment = name.rsplit('/').next().unwrap_or(name);
        let stem = segment.split(',').next().unwrap_or(segment);
        let ext = match stem.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => return FileKind::Unknown,
        };
        match ext.as_str() {
            "txt" => FileKind::Text,
            "pdf" => FileKind::Pdf,
            "xhtml" => FileKind::Markup,
            "zip" => FileKind::Archive,
            _ => FileKind::Unknown,
        }
    }
}

/// Extracts text from a payload of a known kind. `Unknown` payloads yield
/// empty text without touching the bytes.
pub fn extract_text(payload: &[u8], kind: FileKind) -> Result<String, ExtractError> {
    extract_with_kind(payload, kind, 0)
}

pub(crate) fn extract_with_kind(
    payload: &[u8],
    kind: FileKind,
    depth: usize,
) -> Result<String, ExtractError> {
    match kind {
        FileKind::Text => plain_text(payload),
        FileKind::Pdf => pdf::extract(payload),
        FileKind::Markup => Ok(markup::extract(payload)),
        FileKind::Archive => archive::extract(payload, depth),
        FileKind::Unknown => Ok(String::new()),
    }
}

fn plain_text(payload: &[u8]) -> Result<String, ExtractError> {
    Ok(String::from_utf8(payload.to_vec())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_plain_extensions() {
        assert_eq!(FileKind::from_name("report.txt"), FileKind::Text);
        assert_eq!(FileKind::from_name("report.pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_name("report.xhtml"), FileKind::Markup);
        assert_eq!(FileKind::from_name("bundle.zip"), FileKind::Archive);
    }

    #[test]
    fn kind_strips_comma_suffix() {
        assert_eq!(FileKind::from_name("report,v2.pdf"), FileKind::Pdf);
        assert_eq!(
            FileKind::from_name("attachment?file=raport.pdf,type=espi"),
            FileKind::Pdf
        );
    }

    #[test]
    fn kind_uses_last_path_segment() {
        assert_eq!(
            FileKind::from_name("espi/pl/reports/view/raport.zip"),
            FileKind::Archive
        );
    }

    #[test]
    fn kind_is_case_insensitive() {
        assert_eq!(FileKind::from_name("REPORT.PDF"), FileKind::Pdf);
        assert_eq!(FileKind::from_name("report.Txt"), FileKind::Text);
    }

    #[test]
    fn signature_files_are_unknown() {
        assert_eq!(FileKind::from_name("sig.xades"), FileKind::Unknown);
        assert_eq!(FileKind::from_name("raport.pdf.xades"), FileKind::Unknown);
    }

    #[test]
    fn malformed_names_are_unknown() {
        assert_eq!(FileKind::from_name("no-extension"), FileKind::Unknown);
        assert_eq!(FileKind::from_name(""), FileKind::Unknown);
        assert_eq!(FileKind::from_name("trailing/"), FileKind::Unknown);
    }

    #[test]
    fn kind_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(FileKind::from_name("report,v2.pdf"), FileKind::Pdf);
        }
    }

    #[test]
    fn plain_text_passes_utf8_through() {
        let text = extract_text("Revenue up 5%".as_bytes(), FileKind::Text).unwrap();
        assert_eq!(text, "Revenue up 5%");
    }

    #[test]
    fn plain_text_rejects_invalid_utf8() {
        let err = extract_text(&[0xff, 0xfe, 0x00], FileKind::Text).unwrap_err();
        assert!(matches!(err, ExtractError::Utf8(_)));
    }

    #[test]
    fn unknown_kind_yields_empty_text() {
        let text = extract_text(b"whatever", FileKind::Unknown).unwrap();
        assert_eq!(text, "");
    }
}
