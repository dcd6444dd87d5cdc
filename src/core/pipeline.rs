use crate::core::extract;
use crate::domain::model::PriceRecord;
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::Result;
use reqwest::Client;

/// Fetches the configured page and hands its info-bar text to the extractor.
/// One plain GET per scrape; no custom headers, default redirect handling.
pub struct TickerPipeline<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> TickerPipeline<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for TickerPipeline<C> {
    async fn extract(&self) -> Result<String> {
        tracing::debug!("Fetching {}", self.config.source_url());
        let response = self.client.get(self.config.source_url()).send().await?;
        tracing::debug!("Response status: {}", response.status());

        let body = response.text().await?;
        extract::locate_info_bar(&body)
    }

    async fn transform(&self, raw: String) -> Result<PriceRecord> {
        Ok(extract::parse_record(&raw))
    }
}
