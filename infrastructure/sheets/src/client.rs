use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::Client;

static SHARED: OnceCell<Arc<SheetsClient>> = OnceCell::new();

/// HTTP client bound to the spreadsheet web app endpoint.
pub struct SheetsClient {
    pub client: Client,
    pub endpoint: String,
}

impl SheetsClient {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self { client, endpoint }
    }

    /// Process-wide instance, built on first use and never torn down. Later
    /// calls get the first instance whatever arguments they pass.
    pub fn shared(endpoint: &str, timeout: Duration) -> Arc<SheetsClient> {
        SHARED
            .get_or_init(|| {
                tracing::debug!("Building remote catalog client for {}", endpoint);
                Arc::new(SheetsClient::new(endpoint.to_string(), timeout))
            })
            .clone()
    }
}
