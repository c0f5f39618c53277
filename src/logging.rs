use crate::utils::truncate_str;
use crate::{PageMetadata, SchemaError, SchemaType};
use std::fmt::Display;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt as subscriber_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

#[derive(Debug)]
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: String,
    pub console_output: bool,
    pub file_output: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".into(),
            log_level: "info".into(),
            console_output: true,
            file_output: true,
        }
    }
}

fn create_separator(width: usize, ch: char) -> String {
    std::iter::repeat(ch).take(width).collect()
}

pub fn log_schema_card(url: &str, schema_type: SchemaType, metadata: &PageMetadata) {
    const CARD_WIDTH: usize = 80;
    // Borders, padding and the nine-column label.
    const CONTENT_WIDTH: usize = CARD_WIDTH - 13;

    let horizontal_line = create_separator(CARD_WIDTH - 2, '═');
    let field = |value: &Option<String>| truncate_str(value.as_deref().unwrap_or("N/A"), CONTENT_WIDTH);

    info!(
        "\n╔{}╗\n\
         ║ URL:     {:<width$} ║\n\
         ║ Type:    {:<width$} ║\n\
         ║ Title:   {:<width$} ║\n\
         ║ Desc:    {:<width$} ║\n\
         ║ Image:   {:<width$} ║\n\
         ║ Icon:    {:<width$} ║\n\
         ║ Social:  {:<width$} ║\n\
         ╚{}╝",
        horizontal_line,
        truncate_str(url, CONTENT_WIDTH),
        schema_type.as_str(),
        field(&metadata.title),
        field(&metadata.description),
        field(&metadata.image_url),
        field(&metadata.icon_url),
        metadata.social_links.len(),
        horizontal_line,
        width = CONTENT_WIDTH
    );
}

pub fn log_error_card<E: Display + std::error::Error>(url: &str, error: &E) {
    const CARD_WIDTH: usize = 70;
    const CONTENT_WIDTH: usize = CARD_WIDTH - 8;

    let top_bottom = create_separator(CARD_WIDTH - 2, '═');
    let middle = create_separator(CARD_WIDTH - 2, '─');

    let mut error_details = error.to_string();
    if let Some(source) = error.source() {
        error_details = format!("{error_details} (cause: {source})");
    }

    error!(
        "\n╔═{}═╗\n\
         ║ URL: {:<width$} ║\n\
         ║{}║\n\
         ║ Error: {:<width$} ║\n\
         ╚═{}═╝",
        top_bottom,
        truncate_str(url, CONTENT_WIDTH),
        middle,
        truncate_str(&error_details, CONTENT_WIDTH),
        top_bottom,
        width = CONTENT_WIDTH
    );
}

/// Installs the process-wide subscriber. Call once, from the binary.
///
/// `RUST_LOG` wins over `config.log_level` when set.
pub fn setup_logging(config: LogConfig) -> Result<(), SchemaError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let mut layers = Vec::new();

    if config.console_output {
        let console_layer = subscriber_fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true)
            .with_file(true)
            .pretty();
        layers.push(console_layer.boxed());
    }

    if config.file_output {
        std::fs::create_dir_all(&config.log_dir).map_err(|e| {
            SchemaError::ConfigError(format!(
                "Failed to create log directory {}: {e}",
                config.log_dir.display()
            ))
        })?;

        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "schema-service.log");

        let file_layer = subscriber_fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true)
            .with_file(true)
            .with_writer(file_appender);

        layers.push(file_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .map_err(|e| SchemaError::ConfigError(format!("Failed to set global subscriber: {e}")))?;

    debug!("Logging system initialized with config: {:?}", config);
    Ok(())
}

/// Scoped subscriber for the current thread; dropped guard restores the previous one.
pub struct LogLevelGuard {
    _guard: tracing::dispatcher::DefaultGuard,
}

impl LogLevelGuard {
    pub fn set_level(level: &str) -> Self {
        let filter = EnvFilter::new(level);
        let subscriber = tracing_subscriber::registry()
            .with(subscriber_fmt::layer().with_test_writer())
            .with(filter);

        LogLevelGuard {
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }
}
