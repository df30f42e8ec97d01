use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::ScrapeError;
use crate::extract::FileKind;

// The detail pages carry no ids or labels around the attachment region, so
// everything below is positional against the page's content container.
const MAIN_CONTAINER_SELECTOR: &str =
    "body > section.mainContainer.padding-top-0.padding-bottom-20 > div.container > div > div > div > div";
const TABLE_SELECTOR: &str =
    "body > section.mainContainer.padding-top-0.padding-bottom-20 > div.container > div > div > div > div > table";
const ATTACHMENT_LINK_SELECTOR: &str = "tr > td > li > a";

/// One attachment link found on a detail page, already resolved to an
/// absolute URL and classified. `Unknown` kinds never make it into the
/// resolved list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRef {
    pub raw_href: String,
    pub url: Url,
    pub kind: FileKind,
}

/// Visible text of the main content container: every text node trimmed and
/// concatenated without separators. Empty when the container is absent.
pub fn main_text(document: &Html) -> String {
    let selector = Selector::parse(MAIN_CONTAINER_SELECTOR).unwrap();
    document
        .select(&selector)
        .next()
        .map(|container| {
            container
                .text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Candidate tables for the attachment list: content-region tables that
/// contain at least one hyperlink with a non-empty destination. Exposed so
/// the positional selection below can be tested against synthetic pages.
pub fn link_bearing_tables(document: &Html) -> Vec<ElementRef<'_>> {
    let tables = Selector::parse(TABLE_SELECTOR).unwrap();
    let anchors = Selector::parse("a[href]").unwrap();

    document
        .select(&tables)
        .filter(|table| {
            table
                .select(&anchors)
                .any(|a| a.value().attr("href").map(|h| !h.is_empty()).unwrap_or(false))
        })
        .collect()
}

/// Resolves the attachment links of a detail page.
///
/// The pages place a table of extraneous links before the real attachment
/// table, so with fewer than two link-bearing tables no attachments are
/// recognized and otherwise the second one is authoritative. Within it,
/// links are taken from list items inside table cells in document order.
/// Hrefs starting with the literal `attachment` are prefixed with the
/// external report-viewer base; everything else joins against the page URL.
pub fn resolve_attachments(
    document: &Html,
    page_url: &Url,
    attachment_base: &str,
) -> Result<Vec<AttachmentRef>, ScrapeError> {
    let tables = link_bearing_tables(document);
    if tables.len() < 2 {
        return Ok(Vec::new());
    }

    let links = Selector::parse(ATTACHMENT_LINK_SELECTOR).unwrap();
    let mut refs = Vec::new();

    for anchor in tables[1].select(&links) {
        let href = match anchor.value().attr("href") {
            Some(h) if !h.is_empty() => h,
            _ => continue,
        };

        let kind = FileKind::from_name(href);
        if kind == FileKind::Unknown {
            log::debug!("skipping unsupported attachment {}", href);
            continue;
        }

        let url = if href.starts_with("attachment") {
            let absolute = format!("{}{}", attachment_base, href);
            Url::parse(&absolute).map_err(|e| ScrapeError::InvalidUrl {
                href: href.to_string(),
                base: attachment_base.to_string(),
                source: e,
            })?
        } else {
            page_url.join(href).map_err(|e| ScrapeError::InvalidUrl {
                href: href.to_string(),
                base: page_url.to_string(),
                source: e,
            })?
        };

        refs.push(AttachmentRef {
            raw_href: href.to_string(),
            url,
            kind,
        });
    }

    Ok(refs)
}
