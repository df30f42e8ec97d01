use anyhow::{anyhow, Result};

use crate::gpw::{ATTACHMENT_BASE_URL, LISTING_URL, USER_AGENT};

/// Run configuration. Defaults point at the production GPW endpoints;
/// every field can be overridden through the environment, which is also
/// how integration tests point the pipeline at a local server.
#[derive(Clone, Debug)]
pub struct ScraperConfig {
    pub listing_url: String,
    pub attachment_base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            listing_url: LISTING_URL.to_string(),
            attachment_base_url: ATTACHMENT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ScraperConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let timeout_secs = match std::env::var("GPW_TIMEOUT_SECS") {
            Ok(value) => value
                .parse()
                .map_err(|_| anyhow!("GPW_TIMEOUT_SECS must be an integer, got {:?}", value))?,
            Err(_) => defaults.timeout_secs,
        };

        Ok(Self {
            listing_url: std::env::var("GPW_LISTING_URL").unwrap_or(defaults.listing_url),
            attachment_base_url: std::env::var("GPW_ATTACHMENT_BASE_URL")
                .unwrap_or(defaults.attachment_base_url),
            user_agent: std::env::var("GPW_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout_secs,
        })
    }
}
