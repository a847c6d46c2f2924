use std::time::Duration;

use super::error::ConfigError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote catalog endpoint
///
/// Environment variables:
/// - SHEETS_ENDPOINT_URL: web app URL (optional; remote sync is disabled without it)
/// - SHEETS_TIMEOUT_SECS: request timeout in seconds (default: 30)
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub endpoint: Option<String>,
    pub timeout: Duration,
}

impl SheetsConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint = lookup("SHEETS_ENDPOINT_URL").filter(|url| !url.trim().is_empty());

        let timeout = match lookup("SHEETS_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    name: "SHEETS_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(timeout),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }
}
