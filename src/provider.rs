//! Metadata provider implementations
//!
//! [`HtmlMetadataProvider`] fetches the page itself and scrapes it;
//! [`ApiMetadataProvider`] asks a third-party metadata API instead. Both return
//! the same partial [`PageMetadata`].

use crate::config::ApiProviderConfig;
use crate::utils::{clean_text, origin_from_url};
use crate::{Fetcher, MetadataExtractor, MetadataProvider, PageMetadata, SchemaError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};

#[derive(Clone)]
pub struct HtmlMetadataProvider {
    fetcher: Fetcher,
    extractor: MetadataExtractor,
}

impl HtmlMetadataProvider {
    pub fn new(fetcher: Fetcher) -> Self {
        Self {
            fetcher,
            extractor: MetadataExtractor::new(),
        }
    }

    pub fn with_extractor(mut self, extractor: MetadataExtractor) -> Self {
        self.extractor = extractor;
        self
    }
}

#[async_trait]
impl MetadataProvider for HtmlMetadataProvider {
    fn name(&self) -> &str {
        "html"
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_metadata(&self, url: &str) -> Result<PageMetadata, SchemaError> {
        let page = self.fetcher.fetch(url).await?;
        Ok(self.extractor.extract(&page.html, &page.origin))
    }
}

pub struct ApiMetadataProvider {
    client: Client,
    config: ApiProviderConfig,
}

impl ApiMetadataProvider {
    pub fn new(config: ApiProviderConfig, timeout: Duration) -> Result<Self, SchemaError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            error!(error = %e, "Failed to create metadata API client");
            SchemaError::ConfigError(format!("Failed to initialize HTTP client: {e}"))
        })?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl MetadataProvider for ApiMetadataProvider {
    fn name(&self) -> &str {
        "api"
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_metadata(&self, url: &str) -> Result<PageMetadata, SchemaError> {
        let domain = origin_from_url(url)?;

        let mut request = self
            .client
            .get(&self.config.endpoint)
            .query(&[("url", url)]);
        if let Some(api_key) = &self.config.api_key {
            request = request.header(self.config.api_key_header.as_str(), api_key.as_str());
        }

        let response = request.send().await.map_err(|e| {
            debug!(error = %e, endpoint = %self.config.endpoint, "Metadata API request failed");
            SchemaError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, url = %url, "Metadata API returned non-success status");
            return Err(SchemaError::BadStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                SchemaError::Timeout(e.to_string())
            } else {
                SchemaError::ExtractError(format!("Failed to parse metadata API response: {e}"))
            }
        })?;

        let metadata = metadata_from_api_body(&body, domain);
        debug!(title = ?metadata.title, "Metadata API lookup finished");
        Ok(metadata)
    }
}

/// Reads fields from a top-level `data` object when present, otherwise from the root.
fn metadata_from_api_body(body: &Value, domain: String) -> PageMetadata {
    let data = body.get("data").filter(|d| d.is_object()).unwrap_or(body);

    PageMetadata {
        title: string_field(data, "title"),
        description: string_field(data, "description"),
        icon_url: url_field(data, "logo"),
        image_url: url_field(data, "image"),
        social_links: Vec::new(),
        domain,
    }
}

fn string_field(data: &Value, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).and_then(clean_text)
}

// Either "image": "https://..." or "image": { "url": "https://..." }.
fn url_field(data: &Value, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::String(s) => clean_text(s),
        Value::Object(obj) => obj.get("url").and_then(Value::as_str).and_then(clean_text),
        _ => None,
    }
}
