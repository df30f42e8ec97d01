use std::io::{Cursor, Read};

use super::{extract_with_kind, ExtractError, FileKind, MAX_ARCHIVE_DEPTH};

/// Extracts text from every supported entry of a ZIP payload, in the
/// archive's internal listing order. Entry kinds are derived from the entry
/// names, independently of the archive's own name; unknown kinds are skipped
/// silently and an entry that fails to extract contributes empty text.
/// Nested archives are followed up to [`MAX_ARCHIVE_DEPTH`] levels.
pub fn extract(payload: &[u8], depth: usize) -> Result<String, ExtractError> {
    if depth >= MAX_ARCHIVE_DEPTH {
        return Err(ExtractError::TooDeep(MAX_ARCHIVE_DEPTH));
    }

    let mut archive = zip::ZipArchive::new(Cursor::new(payload))
        .map_err(|e| ExtractError::Archive(e.to_string()))?;

    let mut text = String::new();
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| ExtractError::Archive(e.to_string()))?;
        let name = entry.name().to_string();

        let kind = FileKind::from_name(&name);
        if kind == FileKind::Unknown {
            continue;
        }

        let mut contents = Vec::new();
        if let Err(e) = entry.read_to_end(&mut contents) {
            log::warn!("skipping unreadable archive entry {}: {}", name, e);
            continue;
        }

        match extract_with_kind(&contents, kind, depth + 1) {
            Ok(entry_text) => text.push_str(&entry_text),
            Err(e) => log::warn!("extraction failed for archive entry {}: {}", name, e),
        }
    }

    Ok(text)
}
