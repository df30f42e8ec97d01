//! Scraping of GPW (Warsaw Stock Exchange) disclosure pages: the dated
//! listing of published reports, per-report detail pages and the documents
//! attached to them.

pub mod detail;
pub mod fetch;
pub mod listing;

// Hardcoded values
pub const LISTING_URL: &str = "https://www.gpw.pl/komunikaty";
pub const ATTACHMENT_BASE_URL: &str = "https://infostrefa.com/espi/pl/reports/view/";
pub const USER_AGENT: &str = "software@example.com";

/// Fixed listing query filters: report categories and report types.
pub const CATEGORY_FILTER: &str = "EBI,ESPI";
pub const REPORT_TYPE_FILTER: &str = "RB,P,Q,O,R";
