use crate::config::{ProviderKind, ServiceConfig};
use crate::schema_builder::{render, SchemaContext, SchemaResult};
use crate::{
    ApiMetadataProvider, Fetcher, FetcherConfig, HtmlMetadataProvider, MetadataExtractor,
    MetadataProvider, SchemaError, SchemaType,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Body of `POST /generate-schema`. Both fields are required; they are optional
/// here so a missing field is reported as such instead of as a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "schemaType")]
    pub schema_type: Option<String>,
}

impl SchemaRequest {
    pub fn new(url: impl Into<String>, schema_type: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            schema_type: Some(schema_type.into()),
        }
    }
}

/// SchemaService runs one request end to end: validate, look up metadata, render.
#[derive(Clone)]
pub struct SchemaService {
    provider: Arc<dyn MetadataProvider>,
}

impl SchemaService {
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, SchemaError> {
        config.validate()?;

        let provider: Arc<dyn MetadataProvider> = match config.provider {
            ProviderKind::Html => {
                let fetcher = Fetcher::new_with_config(FetcherConfig {
                    user_agent: config.user_agent.clone(),
                    timeout: config.timeout,
                    ..FetcherConfig::default()
                })?;
                let extractor =
                    MetadataExtractor::with_social_domains(config.social_domains.iter().cloned());
                Arc::new(HtmlMetadataProvider::new(fetcher).with_extractor(extractor))
            }
            ProviderKind::Api => Arc::new(ApiMetadataProvider::new(
                config.api.clone(),
                config.timeout,
            )?),
        };

        debug!(provider = provider.name(), "SchemaService initialized");
        Ok(Self { provider })
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    #[instrument(
        level = "info",
        skip(self, request),
        fields(url = request.url.as_deref(), schema_type = request.schema_type.as_deref())
    )]
    pub async fn generate(&self, request: &SchemaRequest) -> Result<SchemaResult, SchemaError> {
        let result = self.generate_inner(request).await;
        if let Err(e) = &result {
            e.log();
            #[cfg(feature = "logging")]
            crate::log_error_card(request.url.as_deref().unwrap_or_default(), e);
        }
        result
    }

    async fn generate_inner(&self, request: &SchemaRequest) -> Result<SchemaResult, SchemaError> {
        let url = non_empty(&request.url).ok_or(SchemaError::MissingField)?;
        let schema_type = non_empty(&request.schema_type).ok_or(SchemaError::MissingField)?;

        // Reject unknown types before spending a network round trip on them.
        let schema_type: SchemaType = schema_type.parse()?;

        let metadata = self.provider.get_metadata(url).await?;

        #[cfg(feature = "logging")]
        crate::log_schema_card(url, schema_type, &metadata);

        let ctx = SchemaContext {
            schema_type,
            url,
            metadata: &metadata,
            now: Utc::now(),
        };
        let schema = render(&ctx);

        info!(schema_type = %schema_type, fields = schema.len(), "Schema generated");
        Ok(schema)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
