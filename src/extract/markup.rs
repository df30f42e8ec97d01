use scraper::Html;

/// Extracts all text-node content of an HTML/XHTML document in document
/// order. Adjacent text nodes are joined directly, with no separator
/// inserted between them. Parsing is lenient; bytes that are not valid
/// UTF-8 are decoded lossily.
pub fn extract(payload: &[u8]) -> String {
    let raw = String::from_utf8_lossy(payload);
    let document = Html::parse_document(&raw);
    document.root_element().text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_text_nodes_without_separator() {
        let html = b"<html><body><p>Revenue</p><p> up 5%</p></body></html>";
        assert_eq!(extract(html), "Revenue up 5%");
    }

    #[test]
    fn handles_xhtml_with_declaration() {
        let xhtml = br#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml"><body><div>Raport</div><div>ESPI</div></body></html>"#;
        let text = extract(xhtml);
        assert!(text.contains("RaportESPI"), "got: {:?}", text);
    }

    #[test]
    fn empty_document_yields_empty_text() {
        assert_eq!(extract(b""), "");
    }
}
