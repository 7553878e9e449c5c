use std::env;

use anyhow::{anyhow, Context, Result};
use chrono::FixedOffset;

/// Dashboard configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Backend
    pub content_api_url: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,

    /// Zone used for calendar days and schedule times (HST by default).
    pub display_offset: FixedOffset,
}

impl Config {
    /// Load configuration from environment variables. Every variable has a default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let web_port = match lookup("WEB_PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("WEB_PORT must be a port number, got {port:?}"))?,
            None => 3000,
        };

        let offset_hours: i32 = match lookup("DISPLAY_UTC_OFFSET_HOURS") {
            Some(hours) => hours
                .trim()
                .parse()
                .with_context(|| format!("DISPLAY_UTC_OFFSET_HOURS must be an integer, got {hours:?}"))?,
            None => -10,
        };
        let display_offset = FixedOffset::east_opt(offset_hours * 3600)
            .ok_or_else(|| anyhow!("DISPLAY_UTC_OFFSET_HOURS out of range: {offset_hours}"))?;

        Ok(Self {
            content_api_url: lookup("CONTENT_API_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| content_api_client::DEFAULT_BASE_URL.to_string()),
            web_host: lookup("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_port,
            display_offset,
        })
    }

    /// Config for tests and local tooling: given backend, default everything else.
    pub fn for_api(content_api_url: &str) -> Self {
        Self {
            content_api_url: content_api_url.to_string(),
            web_host: "127.0.0.1".to_string(),
            web_port: 3000,
            display_offset: hst(),
        }
    }
}

/// Hawaii-Aleutian Standard Time, UTC-10, no daylight saving.
pub fn hst() -> FixedOffset {
    FixedOffset::west_opt(10 * 3600).expect("UTC-10 is a valid offset")
}
