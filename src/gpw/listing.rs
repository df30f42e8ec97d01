use chrono::NaiveDate;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::core::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::gpw::{fetch, CATEGORY_FILTER, REPORT_TYPE_FILTER};

const ENTRY_SELECTOR: &str = "#search-result > li > strong > a";

/// One disclosure found on the listing page for the queried date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub title: String,
    pub url: Url,
}

/// Builds the listing URL for a date filter. The date must be DD-MM-YYYY;
/// category and report-type filters are fixed.
pub fn listing_url(base: &str, date: &str) -> Result<Url, ScrapeError> {
    NaiveDate::parse_from_str(date, "%d-%m-%Y")
        .map_err(|_| ScrapeError::InvalidDate(date.to_string()))?;

    let mut url = Url::parse(base).map_err(|e| ScrapeError::InvalidUrl {
        href: base.to_string(),
        base: String::new(),
        source: e,
    })?;
    url.query_pairs_mut()
        .append_pair("categoryRaports", CATEGORY_FILTER)
        .append_pair("typeRaports", REPORT_TYPE_FILTER)
        .append_pair("searchText", "")
        .append_pair("date", date);
    Ok(url)
}

/// Parses the result list into (title, detail URL) pairs in render order.
/// Relative hrefs are resolved against the listing URL; entries whose href
/// cannot be resolved are dropped. No sorting, no deduplication.
pub fn parse_listing(html: &str, listing_url: &Url) -> Vec<ListingEntry> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(ENTRY_SELECTOR).unwrap();

    document
        .select(&selector)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            let url = listing_url.join(href).ok()?;
            let title = anchor.text().collect::<String>().trim().to_string();
            Some(ListingEntry { title, url })
        })
        .collect()
}

pub async fn fetch_listing(
    client: &Client,
    config: &ScraperConfig,
    date: &str,
) -> Result<Vec<ListingEntry>, ScrapeError> {
    let url = listing_url(&config.listing_url, date)?;
    log::info!("fetching listing for {} from {}", date, url);
    let body = fetch::fetch_text(client, &url).await?;
    Ok(parse_listing(&body, &url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_carries_fixed_filters_and_date() {
        let url = listing_url("https://www.gpw.pl/komunikaty", "07-05-2024").unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("categoryRaports=EBI%2CESPI"));
        assert!(query.contains("typeRaports=RB%2CP%2CQ%2CO%2CR"));
        assert!(query.contains("date=07-05-2024"));
    }

    #[test]
    fn listing_url_rejects_malformed_dates() {
        for bad in ["2024-05-07", "32-01-2024", "not a date", ""] {
            let err = listing_url("https://www.gpw.pl/komunikaty", bad).unwrap_err();
            assert!(matches!(err, ScrapeError::InvalidDate(_)), "input {:?}", bad);
        }
    }

    #[test]
    fn parses_entries_in_render_order() {
        let base = Url::parse("https://www.gpw.pl/komunikaty?date=07-05-2024").unwrap();
        let html = r#"
        <html><body><ul id="search-result">
          <li><strong><a href="komunikat?geru_id=1">  Spolka A: raport Q1  </a></strong></li>
          <li><strong><a href="/komunikat?geru_id=2">Spolka B: raport biezacy</a></strong></li>
        </ul></body></html>"#;

        let entries = parse_listing(html, &base);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Spolka A: raport Q1");
        assert_eq!(
            entries[0].url.as_str(),
            "https://www.gpw.pl/komunikat?geru_id=1"
        );
        assert_eq!(
            entries[1].url.as_str(),
            "https://www.gpw.pl/komunikat?geru_id=2"
        );
    }

    #[test]
    fn page_without_results_yields_no_entries() {
        let base = Url::parse("https://www.gpw.pl/komunikaty").unwrap();
        let html = "<html><body><p>Brak wynikow</p></body></html>";
        assert!(parse_listing(html, &base).is_empty());
    }
}
