//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::AmountInput;

/// Envelope message for a successful conversion.
pub const SUCCESS_MESSAGE: &str = "Currency conversion successful";

/// Envelope message for any failed conversion.
pub const FAILURE_MESSAGE: &str = "Currency conversion failed. Please try again later.";

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to convert an amount between two currencies.
///
/// All fields are optional on the wire; the service reports missing ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    /// Source currency code (case-insensitive)
    #[schema(example = "usd")]
    pub from_currency: Option<String>,
    /// Target currency code (case-insensitive)
    #[schema(example = "eur")]
    pub to_currency: Option<String>,
    /// Amount in the source currency, as a number or numeric string
    #[schema(value_type = Option<f64>, example = 100)]
    pub amount: Option<AmountInput>,
}

impl ConversionRequest {
    pub fn new(
        from_currency: impl Into<String>,
        to_currency: impl Into<String>,
        amount: impl Into<AmountInput>,
    ) -> Self {
        Self {
            from_currency: Some(from_currency.into()),
            to_currency: Some(to_currency.into()),
            amount: Some(amount.into()),
        }
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    #[schema(example = "USD")]
    pub from_currency: String,
    #[schema(example = "EUR")]
    pub to_currency: String,
    /// The requested amount
    #[schema(example = 100)]
    pub amount: f64,
    /// Converted amount, rounded to 2 decimal places
    #[schema(example = 91.23)]
    pub converted_amount: f64,
    #[schema(example = 0.9123)]
    pub conversion_rate: f64,
    /// Provider timestamp of the last rate update, passed through unchanged
    #[schema(example = "Fri, 27 Mar 2020 00:00:00 +0000")]
    pub last_updated: Option<String>,
    /// Provider timestamp of the next rate update, passed through unchanged
    #[schema(example = "Sat, 28 Mar 2020 00:00:00 +0000")]
    pub next_update: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Envelopes
// ─────────────────────────────────────────────────────────────────────────────

/// Success envelope returned by `POST /convert`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversionResponse {
    #[schema(example = "Currency conversion successful")]
    pub message: String,
    pub data: ConversionResult,
}

impl ConversionResponse {
    pub fn new(data: ConversionResult) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}

/// Failure envelope returned by `POST /convert`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversionFailure {
    #[schema(example = "Currency conversion failed. Please try again later.")]
    pub message: String,
    /// Message of the underlying service error
    #[schema(example = "Invalid API key. Please verify your API key.")]
    pub error: String,
}

impl ConversionFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            message: FAILURE_MESSAGE.to_string(),
            error: error.into(),
        }
    }
}
