use reqwest::Client;
use url::Url;

use crate::error::ScrapeError;
use crate::extract::{self, ExtractError, FileKind};
use crate::gpw::detail::AttachmentRef;

/// Single-attempt GET returning the raw body. Non-success status and
/// transport failures (including timeouts) both abort the item in flight;
/// nothing here retries.
pub async fn fetch_bytes(client: &Client, url: &Url) -> Result<Vec<u8>, ScrapeError> {
    log::debug!("GET {}", url);

    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| ScrapeError::Transport {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes().await.map_err(|e| ScrapeError::Transport {
        url: url.to_string(),
        source: e,
    })?;
    Ok(body.to_vec())
}

pub async fn fetch_text(client: &Client, url: &Url) -> Result<String, ScrapeError> {
    let body = fetch_bytes(client, url).await?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Fetches one attachment and extracts its text. The kind is checked before
/// any request is issued, so unsupported attachments cost nothing. A fetch
/// failure propagates, and so does a payload whose outer container cannot
/// be opened at all (a `.zip` that is not a ZIP); internal-structure
/// failures are best-effort and contribute empty text.
pub async fn attachment_text(
    client: &Client,
    attachment: &AttachmentRef,
) -> Result<String, ScrapeError> {
    if attachment.kind == FileKind::Unknown {
        return Ok(String::new());
    }

    let payload = fetch_bytes(client, &attachment.url).await?;
    match extract::extract_text(&payload, attachment.kind) {
        Ok(text) => Ok(text),
        // Entries inside a readable archive degrade to empty text on their
        // own; an error here means the container itself was unreadable.
        Err(e @ ExtractError::Archive(_)) => Err(ScrapeError::Parse {
            url: attachment.url.to_string(),
            reason: e.to_string(),
        }),
        Err(e) => {
            log::warn!("extraction failed for {}: {}", attachment.url, e);
            Ok(String::new())
        }
    }
}
