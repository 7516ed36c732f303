use crate::domain::ports::TextFetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

/// Live implementation of the fetch port against the PVGIS HTTP API.
#[derive(Debug, Clone, Default)]
pub struct PvgisClient {
    client: Client,
}

impl PvgisClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl TextFetcher for PvgisClient {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "text/plain")
            .send()
            .await?;

        tracing::debug!("PVGIS response status: {}", response.status());

        // Non-success statuses become an opaque transport error.
        let response = response.error_for_status()?;
        let body = response.text().await?;
        Ok(body)
    }
}
