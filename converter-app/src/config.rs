//! Configuration loading from environment.

use std::env;

use converter_hex::inbound::ErrorStatusMode;
use exchange_rates::ExchangeApiConfig;

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub exchange: ExchangeApiConfig,
    pub status_mode: ErrorStatusMode,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let base_url = env::var("EXCHANGE_RATE_API_BASE_URL").map_err(|_| {
            anyhow::anyhow!("EXCHANGE_RATE_API_BASE_URL environment variable is required")
        })?;

        let api_key = env::var("EXCHANGE_RATE_API_KEY")
            .map_err(|_| anyhow::anyhow!("EXCHANGE_RATE_API_KEY environment variable is required"))?;

        let status_mode = match env::var("ERROR_STATUS_MODE") {
            Ok(raw) => raw.parse().map_err(|e: String| anyhow::anyhow!(e))?,
            Err(_) => ErrorStatusMode::default(),
        };

        let otlp_endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .filter(|endpoint| !endpoint.is_empty());

        Ok(Self {
            port,
            exchange: ExchangeApiConfig::new(base_url, api_key),
            status_mode,
            otlp_endpoint,
        })
    }
}
