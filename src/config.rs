use crate::extractor::SOCIAL_DOMAINS;
use crate::fetcher::{BROWSER_USER_AGENT, DEFAULT_TIMEOUT};
use crate::SchemaError;
use std::net::SocketAddr;
use std::time::Duration;

/// Environment variable holding the metadata API credential.
pub const API_KEY_ENV: &str = "SCHEMA_PROVIDER_API_KEY";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Which [`MetadataProvider`](crate::MetadataProvider) backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// Fetch the page and scrape its HTML.
    #[default]
    Html,
    /// Ask a third-party metadata API.
    Api,
}

#[derive(Debug, Clone)]
pub struct ApiProviderConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub api_key_header: String,
}

impl Default for ApiProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            api_key_header: "x-api-key".to_string(),
        }
    }
}

impl ApiProviderConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_key_header(mut self, header: impl Into<String>) -> Self {
        self.api_key_header = header.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub timeout: Duration,
    pub user_agent: String,
    /// Hosts an anchor must mention to count as a social profile link.
    pub social_domains: Vec<String>,
    pub provider: ProviderKind,
    pub api: ApiProviderConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            timeout: DEFAULT_TIMEOUT,
            user_agent: BROWSER_USER_AGENT.to_string(),
            social_domains: SOCIAL_DOMAINS.iter().map(|d| d.to_string()).collect(),
            provider: ProviderKind::Html,
            api: ApiProviderConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_social_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.social_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_provider(mut self, provider: ProviderKind) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_api_config(mut self, api: ApiProviderConfig) -> Self {
        self.api = api;
        self
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.timeout.is_zero() {
            return Err(SchemaError::ConfigError(
                "fetch timeout must be greater than zero".to_string(),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(SchemaError::ConfigError(
                "user agent must not be empty".to_string(),
            ));
        }

        if self.provider == ProviderKind::Api && self.api.endpoint.trim().is_empty() {
            return Err(SchemaError::ConfigError(
                "the api provider requires an endpoint".to_string(),
            ));
        }

        Ok(())
    }
}
