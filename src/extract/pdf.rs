use super::ExtractError;

/// Extracts the text layer of every page, in page order, from an in-memory
/// PDF. Image-only pages have no text layer and contribute nothing; a
/// structurally unreadable document is an error.
pub fn extract(payload: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(payload).map_err(|e| ExtractError::Pdf(e.to_string()))
}
