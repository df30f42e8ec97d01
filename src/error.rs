use thiserror::Error;

/// Errors produced while fetching and assembling a disclosure corpus.
///
/// Extraction failures are deliberately not represented here: a payload that
/// matched a known file kind but could not be read contributes empty text
/// instead of failing the item (see [`crate::extract::ExtractError`]).
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Single-attempt GET answered with a non-success status. Never retried.
    #[error("GET {url} returned status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Transport-level failure: connect error, timeout, or body read error.
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The fetched content could not be interpreted as its expected
    /// structural format (e.g. an archive container that is not a ZIP).
    /// Propagates like a fetch failure; it is not retried.
    #[error("cannot parse {url}: {reason}")]
    Parse { url: String, reason: String },

    /// A link destination could not be turned into an absolute URL.
    #[error("cannot resolve {href:?} against {base}: {source}")]
    InvalidUrl {
        href: String,
        base: String,
        #[source]
        source: url::ParseError,
    },

    /// The date filter did not parse as DD-MM-YYYY.
    #[error("invalid date filter {0:?}, expected DD-MM-YYYY")]
    InvalidDate(String),
}

impl ScrapeError {
    /// True for network-level failures (status or transport), as opposed to
    /// local resolution problems.
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            ScrapeError::HttpStatus { .. } | ScrapeError::Transport { .. }
        )
    }
}
