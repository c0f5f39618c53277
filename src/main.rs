use clap::{Parser, ValueEnum};
use schema_service::{
    server, setup_logging, ApiProviderConfig, LogConfig, ProviderKind, SchemaService,
    ServiceConfig, API_KEY_ENV, BROWSER_USER_AGENT, DEFAULT_BIND_ADDR, SOCIAL_DOMAINS,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::error;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProviderArg {
    Html,
    Api,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Html => ProviderKind::Html,
            ProviderArg::Api => ProviderKind::Api,
        }
    }
}

/// Generates schema.org JSON-LD for arbitrary web pages.
#[derive(Debug, Parser)]
#[command(name = "schema-service", version, about)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "SCHEMA_SERVICE_BIND", default_value = DEFAULT_BIND_ADDR)]
    bind: SocketAddr,

    /// Timeout for the outbound fetch, in seconds
    #[arg(long, env = "SCHEMA_FETCH_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// User-Agent sent with outbound page fetches
    #[arg(long, env = "SCHEMA_USER_AGENT", default_value = BROWSER_USER_AGENT)]
    user_agent: String,

    /// Domains that mark an anchor as a social profile link (comma separated)
    #[arg(
        long = "social-domain",
        env = "SCHEMA_SOCIAL_DOMAINS",
        value_delimiter = ',',
        default_values_t = SOCIAL_DOMAINS.map(String::from)
    )]
    social_domains: Vec<String>,

    /// Where page metadata comes from
    #[arg(long, env = "SCHEMA_PROVIDER", value_enum, default_value = "html")]
    provider: ProviderArg,

    /// Metadata API endpoint (api provider only)
    #[arg(long, env = "SCHEMA_PROVIDER_ENDPOINT")]
    provider_endpoint: Option<String>,

    /// Metadata API key (api provider only)
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    provider_api_key: Option<String>,

    /// Header the API key is sent in
    #[arg(long, default_value = "x-api-key")]
    provider_api_key_header: String,

    #[arg(long, default_value = "info")]
    log_level: String,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Log to the console only
    #[arg(long)]
    no_file_log: bool,
}

impl Cli {
    fn service_config(&self) -> ServiceConfig {
        let mut api = ApiProviderConfig::new(self.provider_endpoint.clone().unwrap_or_default())
            .with_api_key_header(self.provider_api_key_header.clone());
        if let Some(key) = &self.provider_api_key {
            api = api.with_api_key(key.clone());
        }

        ServiceConfig::new()
            .with_bind_addr(self.bind)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_user_agent(self.user_agent.clone())
            .with_social_domains(self.social_domains.iter().cloned())
            .with_provider(self.provider.into())
            .with_api_config(api)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(LogConfig {
        log_dir: cli.log_dir.clone(),
        log_level: cli.log_level.clone(),
        console_output: true,
        file_output: !cli.no_file_log,
    })?;

    let config = cli.service_config();
    let service = SchemaService::from_config(&config).inspect_err(|e| e.log())?;

    if let Err(e) = server::serve(service, config.bind_addr).await {
        error!(error = %e, "Schema service stopped");
        return Err(e.into());
    }

    Ok(())
}
