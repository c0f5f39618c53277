use crate::utils::origin_from_url;
use crate::SchemaError;
use reqwest::{header::HeaderMap, header::HeaderValue, Client};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Many sites answer 403 to default client identities, so requests go out as desktop Chrome.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) \
    Chrome/120.0.0.0 Safari/537.36";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

/// Body of a successful (2xx) fetch.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub html: String,
    /// Scheme and host of the requested URL.
    pub origin: String,
}

impl Fetcher {
    pub fn new() -> Result<Self, SchemaError> {
        debug!("Fetcher initialized with default configuration");
        Self::new_with_config(FetcherConfig::default())
    }

    /// Creates a Fetcher with custom configuration
    pub fn new_with_config(config: FetcherConfig) -> Result<Self, SchemaError> {
        let headers = match config.headers {
            Some(headers) => headers,
            None => browser_headers(),
        };

        let mut client_builder = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .default_headers(headers);

        if let Some(redirect_policy) = config.redirect_policy {
            client_builder = client_builder.redirect(redirect_policy);
        }

        let client = client_builder.build().map_err(|e| {
            error!(error = %e, "Failed to create HTTP client");
            SchemaError::ConfigError(format!("Failed to initialize HTTP client: {e}"))
        })?;

        Ok(Self { client })
    }

    /// Single GET against `url`. No retries.
    ///
    /// Failures are returned, not logged; the caller reports them once.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, SchemaError> {
        debug!(url = %url, "Starting fetch request");

        let origin = origin_from_url(url)?;

        let response = self.client.get(url).send().await.map_err(|e| {
            debug!(error = %e, url = %url, "Failed to send request");
            SchemaError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, url = %url, "Target URL returned non-success status");
            return Err(SchemaError::BadStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await.map_err(|e| {
            debug!(error = %e, url = %url, "Failed to read response body");
            SchemaError::from(e)
        })?;

        debug!(url = %url, content_length = html.len(), "Successfully fetched webpage");
        Ok(FetchedPage { html, origin })
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Accept",
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert("Accept-Language", HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert("Upgrade-Insecure-Requests", HeaderValue::from_static("1"));
    headers
}

/// Options for building a [`Fetcher`].
///
/// # Examples
/// ```
/// use schema_service::{Fetcher, FetcherConfig};
/// use std::time::Duration;
///
/// let fetcher = Fetcher::new_with_config(FetcherConfig {
///     timeout: Duration::from_secs(5),
///     ..FetcherConfig::default()
/// });
/// assert!(fetcher.is_ok());
/// ```
pub struct FetcherConfig {
    pub user_agent: String,
    pub timeout: Duration,
    /// Replaces the browser-like default headers when set.
    pub headers: Option<HeaderMap>,
    pub redirect_policy: Option<reqwest::redirect::Policy>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            headers: None,
            redirect_policy: Some(reqwest::redirect::Policy::limited(10)),
        }
    }
}
