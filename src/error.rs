use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Missing URL or schemaType")]
    MissingField,

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("Unsupported schemaType: {0}")]
    UnsupportedType(String),

    #[error("Request to target URL timed out.")]
    Timeout(String),

    #[error("Failed to fetch target URL: {0}")]
    TransportError(String),

    #[error("Target URL returned status {status}")]
    BadStatus { status: u16, url: String },

    #[error("Failed to fetch target URL: invalid URL ({0})")]
    UrlParseError(#[from] url::ParseError),

    #[error("Failed to extract metadata: {0}")]
    ExtractError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Unexpected(String),
}

impl SchemaError {
    /// HTTP status the request handler answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            SchemaError::MissingField
            | SchemaError::InvalidRequest(_)
            | SchemaError::UnsupportedType(_) => 400,
            SchemaError::Timeout(_) => 504,
            SchemaError::BadStatus { status, .. } if (400..=599).contains(status) => *status,
            SchemaError::BadStatus { .. }
            | SchemaError::TransportError(_)
            | SchemaError::UrlParseError(_)
            | SchemaError::ExtractError(_)
            | SchemaError::ConfigError(_)
            | SchemaError::Unexpected(_) => 500,
        }
    }

    pub fn log(&self) {
        match self {
            SchemaError::MissingField => {
                warn!("Request is missing url or schemaType");
            }
            SchemaError::InvalidRequest(e) => {
                warn!(error = %e, "Request body rejected");
            }
            SchemaError::UnsupportedType(schema_type) => {
                warn!(schema_type = %schema_type, "Unsupported schema type requested");
            }
            SchemaError::Timeout(e) => {
                warn!(error = %e, "Request to target URL timed out");
            }
            SchemaError::TransportError(e) => {
                error!(error = %e, "Content fetch failed");
            }
            SchemaError::BadStatus { status, url } => {
                warn!(status = %status, url = %url, "Target URL returned non-success status");
            }
            SchemaError::UrlParseError(e) => {
                warn!(error = %e, "URL parsing failed");
            }
            SchemaError::ExtractError(e) => {
                error!(error = %e, "Metadata extraction failed");
            }
            SchemaError::ConfigError(e) => {
                error!(error = %e, "Invalid configuration");
            }
            SchemaError::Unexpected(e) => {
                error!(error = %e, "Unexpected error while generating schema");
            }
        }
    }
}

impl From<reqwest::Error> for SchemaError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SchemaError::Timeout(e.to_string())
        } else if let Some(status) = e.status() {
            SchemaError::BadStatus {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            SchemaError::TransportError(e.to_string())
        }
    }
}
