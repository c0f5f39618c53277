use async_trait::async_trait;

mod config;
mod error;
mod extractor;
mod fetcher;
#[cfg(feature = "logging")]
mod logging;
pub mod placeholders;
mod provider;
mod schema_builder;
mod schema_service;
mod schema_type;
pub mod server;
mod utils;

pub use config::{ApiProviderConfig, ProviderKind, ServiceConfig, API_KEY_ENV, DEFAULT_BIND_ADDR};
pub use error::SchemaError;
pub use extractor::{MetadataExtractor, SOCIAL_DOMAINS};
pub use fetcher::{FetchedPage, Fetcher, FetcherConfig, BROWSER_USER_AGENT};
#[cfg(feature = "logging")]
pub use logging::{log_error_card, log_schema_card, setup_logging, LogConfig, LogLevelGuard};
pub use provider::{ApiMetadataProvider, HtmlMetadataProvider};
pub use schema_builder::{build, build_at, SchemaContext, SchemaResult};
pub use schema_service::{SchemaRequest, SchemaService};
pub use schema_type::SchemaType;
pub use utils::{origin_from_url, truncate_str};

/// Metadata scraped from a page, consumed by the schema builders.
///
/// Optional fields are either trimmed non-empty strings or `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub image_url: Option<String>,
    pub social_links: Vec<String>,
    /// Scheme and host of the requested URL, never of the fetched page.
    pub domain: String,
}

impl PageMetadata {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }
}

/// Source of [`PageMetadata`] for a URL.
///
/// Implementations never fail because a field is missing; only transport-level
/// problems and upstream status errors are reported.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn get_metadata(&self, url: &str) -> Result<PageMetadata, SchemaError>;
}
