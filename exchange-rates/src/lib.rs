//! ExchangeRate-API Pair Client
//!
//! Thin HTTP client for the ExchangeRate-API v6 pair conversion endpoint:
//!
//! ```text
//! GET {BASE_URL}/{API_KEY}/pair/{FROM}/{TO}/{AMOUNT}
//! ```
//!
//! The client issues exactly one request per call and performs no caching or
//! retries. Classifying provider failures into application errors is left to
//! the caller; this crate only reports what the provider said.
//!
//! # Example
//! ```no_run
//! use exchange_rates::{ExchangeApiConfig, ExchangeRateApiClient};
//!
//! # async fn run() -> Result<(), exchange_rates::ExchangeError> {
//! let client = ExchangeRateApiClient::new(ExchangeApiConfig::new(
//!     "https://v6.exchangerate-api.com/v6",
//!     "your-api-key",
//! ));
//! let pair = client.pair("USD", "EUR", 100.0).await?;
//! println!("{:?}", pair.conversion_result);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

/// Literal `result` value the provider sends on success.
pub const SUCCESS_RESULT: &str = "success";

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Connection settings for the provider, read once at startup.
#[derive(Clone)]
pub struct ExchangeApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ExchangeApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

// The key is part of the request path, so keep it out of any debug output.
impl fmt::Debug for ExchangeApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire Types
// ─────────────────────────────────────────────────────────────────────────────

/// Body of a 2xx pair response.
///
/// Every field except `result` is optional so that a partial payload can be
/// reported by the caller instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairConversion {
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub base_code: Option<String>,
    #[serde(default)]
    pub target_code: Option<String>,
    #[serde(default)]
    pub conversion_rate: Option<f64>,
    #[serde(default)]
    pub conversion_result: Option<f64>,
    #[serde(default)]
    pub time_last_update_utc: Option<String>,
    #[serde(default)]
    pub time_next_update_utc: Option<String>,
    #[serde(default, rename = "error-type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

impl PairConversion {
    pub fn is_success(&self) -> bool {
        self.result == SUCCESS_RESULT
    }
}

/// Body of a non-2xx provider response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default, rename = "error-type")]
    pub error_type: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Failures reported by the pair client.
///
/// None of the variants carry the request URL, since it embeds the API key.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExchangeError {
    #[error("Provider rejected request ({status}): {error_type}")]
    Provider { status: u16, error_type: String },

    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid provider payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ExchangeError {
    /// The provider's `error-type` code, when the failure carried one.
    pub fn error_type(&self) -> Option<&str> {
        match self {
            ExchangeError::Provider { error_type, .. } => Some(error_type),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the pair endpoint.
#[derive(Debug, Clone)]
pub struct ExchangeRateApiClient {
    config: ExchangeApiConfig,
    http: Client,
}

impl ExchangeRateApiClient {
    /// Creates a client with a default `reqwest::Client`.
    pub fn new(config: ExchangeApiConfig) -> Self {
        Self::with_http(config, Client::new())
    }

    /// Creates a client on top of an existing `reqwest::Client`.
    pub fn with_http(config: ExchangeApiConfig, http: Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &ExchangeApiConfig {
        &self.config
    }

    /// Builds the pair URL. Each path segment is percent-encoded.
    pub fn pair_url(&self, from: &str, to: &str, amount: f64) -> Result<Url, ExchangeError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ExchangeError::InvalidBaseUrl(format!("{}: {}", self.config.base_url, e)))?;

        let amount = amount.to_string();
        url.path_segments_mut()
            .map_err(|_| ExchangeError::InvalidBaseUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend([
                self.config.api_key.as_str(),
                "pair",
                from,
                to,
                amount.as_str(),
            ]);

        Ok(url)
    }

    /// Fetches a pair conversion. Issues a single GET.
    #[tracing::instrument(skip(self))]
    pub async fn pair(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<PairConversion, ExchangeError> {
        let url = self.pair_url(from, to, amount)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ExchangeError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::Transport(e.without_url().to_string()))?;

        if status.is_success() {
            return serde_json::from_str::<PairConversion>(&body)
                .map_err(|e| ExchangeError::InvalidPayload(e.to_string()));
        }

        tracing::debug!(status = status.as_u16(), "provider returned error status");

        match serde_json::from_str::<ProviderErrorBody>(&body) {
            Ok(ProviderErrorBody {
                error_type: Some(error_type),
                ..
            }) => Err(ExchangeError::Provider {
                status: status.as_u16(),
                error_type,
            }),
            _ => Err(ExchangeError::Status {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
