//! Currency Conversion Service
//!
//! Validates conversion requests, calls the exchange rate provider port and
//! maps whatever the provider reports onto the service error taxonomy.
//! Contains NO transport logic - the provider adapter is injected.

use converter_types::{
    ConversionRequest, ConversionResult, CurrencyCode, ExchangeError, ExchangeRateProvider,
    PairConversion, ServiceError,
};

const INVALID_INPUT: &str =
    "Invalid input. Please provide 'fromCurrency', 'toCurrency', and a valid 'amount'.";
const CONVERSION_FAILED: &str =
    "Currency conversion failed. Please check the currency codes or API usage.";
const TRY_AGAIN: &str = "Currency conversion failed. Please try again.";

/// Application service for currency conversion.
///
/// Generic over `P: ExchangeRateProvider` - the adapter is injected at compile time.
/// Holds no mutable state; every call is independent.
pub struct CurrencyService<P: ExchangeRateProvider> {
    provider: P,
}

impl<P: ExchangeRateProvider> CurrencyService<P> {
    /// Creates a new conversion service with the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Converts an amount from one currency to another.
    ///
    /// Invalid input fails with `BadRequest` before the provider is called.
    /// Otherwise exactly one provider call is made.
    #[tracing::instrument(skip(self))]
    pub async fn convert(&self, req: ConversionRequest) -> Result<ConversionResult, ServiceError> {
        let (from, to, amount) = validate(&req)?;

        let pair = self
            .provider
            .pair_conversion(from.as_str(), to.as_str(), amount)
            .await
            .map_err(classify_provider_error)?;

        interpret(pair, amount)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

fn validate(req: &ConversionRequest) -> Result<(CurrencyCode, CurrencyCode, f64), ServiceError> {
    let from = CurrencyCode::parse(req.from_currency.as_deref());
    let to = CurrencyCode::parse(req.to_currency.as_deref());
    let amount = req.amount.as_ref().and_then(|a| a.to_amount());

    match (from, to, amount) {
        (Some(from), Some(to), Some(amount)) => Ok((from, to, amount)),
        _ => Err(ServiceError::BadRequest(INVALID_INPUT.into())),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Provider Result Mapping
// ─────────────────────────────────────────────────────────────────────────────

fn interpret(pair: PairConversion, amount: f64) -> Result<ConversionResult, ServiceError> {
    if !pair.is_success() {
        tracing::warn!(
            result = %pair.result,
            error_type = pair.error_type.as_deref().unwrap_or("-"),
            "provider did not report success"
        );
        return Err(ServiceError::NotFound(CONVERSION_FAILED.into()));
    }

    let PairConversion {
        base_code: Some(from_currency),
        target_code: Some(to_currency),
        conversion_rate: Some(conversion_rate),
        conversion_result: Some(conversion_result),
        time_last_update_utc,
        time_next_update_utc,
        ..
    } = pair
    else {
        tracing::error!("Error during currency conversion: incomplete success payload");
        return Err(ServiceError::InternalServer(TRY_AGAIN.into()));
    };

    Ok(ConversionResult {
        from_currency,
        to_currency,
        amount,
        converted_amount: round_to_cents(conversion_result),
        conversion_rate,
        last_updated: time_last_update_utc,
        next_update: time_next_update_utc,
    })
}

/// Maps a provider failure onto the service error taxonomy.
pub fn classify_provider_error(err: ExchangeError) -> ServiceError {
    let Some(error_type) = err.error_type() else {
        tracing::error!("Error during currency conversion: {}", failure_summary(&err));
        return ServiceError::InternalServer(TRY_AGAIN.into());
    };

    match error_type {
        "unsupported-code" => ServiceError::NotFound("Unsupported currency code provided.".into()),
        "malformed-request" => ServiceError::BadRequest(
            "Malformed request. Please check the request structure.".into(),
        ),
        "invalid-key" => {
            ServiceError::Unauthorized("Invalid API key. Please verify your API key.".into())
        }
        "inactive-account" => ServiceError::Unauthorized(
            "Inactive account. Please confirm your email address.".into(),
        ),
        "quota-reached" => ServiceError::InternalServer(
            "API request quota reached. Please upgrade your plan.".into(),
        ),
        other => {
            tracing::warn!(error_type = other, "unrecognized provider error type");
            ServiceError::InternalServer(
                "Unknown error occurred while processing the request.".into(),
            )
        }
    }
}

const MAX_LOGGED_BODY: usize = 256;

/// Log line for a provider failure. Upstream bodies are cut to a bounded size.
pub(crate) fn failure_summary(err: &ExchangeError) -> String {
    match err {
        ExchangeError::Status { status, body } if body.len() > MAX_LOGGED_BODY => {
            let mut end = MAX_LOGGED_BODY;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!(
                "Provider returned status {}: {}... ({} bytes)",
                status,
                &body[..end],
                body.len()
            )
        }
        other => other.to_string(),
    }
}

/// Rounds to 2 decimal places from the exact stored value.
///
/// Values that only look like halves in decimal (2.675 is stored as
/// 2.67499...) round down. Exact halves, which are odd multiples of 1/8,
/// round away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    let eighths = value.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        return ((value.abs() * 100.0).ceil() / 100.0).copysign(value);
    }

    format!("{:.2}", value).parse().unwrap_or(value)
}
