use std::time::Duration;

use reqwest::Client;
use scraper::Html;

use crate::core::config::ScraperConfig;
use crate::corpus::DocumentRecord;
use crate::error::ScrapeError;
use crate::gpw::{detail, fetch, listing};
use crate::gpw::listing::ListingEntry;

/// A disclosure whose processing failed part-way. The corpus still carries
/// a record for it with whatever text was recovered before the failure.
#[derive(Debug)]
pub struct ItemFailure {
    pub url: String,
    pub error: ScrapeError,
}

#[derive(Debug)]
pub struct RunReport {
    /// One record per listing entry, in listing order.
    pub corpus: Vec<DocumentRecord>,
    pub failures: Vec<ItemFailure>,
}

/// Sequences listing → detail page → attachments for one run. Owns the HTTP
/// client for the run's lifetime; requests are strictly sequential.
pub struct Pipeline {
    client: Client,
    config: ScraperConfig,
}

impl Pipeline {
    pub fn new(config: ScraperConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Scrapes every disclosure published on the given date (DD-MM-YYYY).
    /// A failure inside one item never aborts its siblings: the item keeps
    /// its partial text and gains a failure marker instead.
    pub async fn run(&self, date: &str) -> Result<RunReport, ScrapeError> {
        let entries = listing::fetch_listing(&self.client, &self.config, date).await?;
        log::info!("found {} disclosures for {}", entries.len(), date);

        let mut corpus = Vec::with_capacity(entries.len());
        let mut failures = Vec::new();

        for entry in &entries {
            log::info!("processing {} ({})", entry.title, entry.url);
            let (content, error) = self.scrape_item(entry).await;
            if let Some(error) = error {
                log::error!("processing {} failed: {}", entry.url, error);
                failures.push(ItemFailure {
                    url: entry.url.to_string(),
                    error,
                });
            }
            corpus.push(DocumentRecord {
                url: entry.url.to_string(),
                content,
            });
        }

        Ok(RunReport { corpus, failures })
    }

    /// Main-body text followed by every attachment's text, in link order,
    /// with no separators. Returns the text accumulated so far together
    /// with the error that stopped the item, if any.
    async fn scrape_item(&self, entry: &ListingEntry) -> (String, Option<ScrapeError>) {
        let body = match fetch::fetch_text(&self.client, &entry.url).await {
            Ok(body) => body,
            Err(e) => return (String::new(), Some(e)),
        };

        // The parsed tree is dropped before any attachment fetch.
        let (mut text, attachments) = {
            let document = Html::parse_document(&body);
            let attachments =
                detail::resolve_attachments(&document, &entry.url, &self.config.attachment_base_url);
            (detail::main_text(&document), attachments)
        };

        let attachments = match attachments {
            Ok(attachments) => attachments,
            Err(e) => return (text, Some(e)),
        };

        for attachment in &attachments {
            match fetch::attachment_text(&self.client, attachment).await {
                Ok(attachment_text) => text.push_str(&attachment_text),
                Err(e) => return (text, Some(e)),
            }
        }

        (text, None)
    }
}
