//! Exchange rate provider port.
//!
//! This trait defines the interface for pair conversion lookups.
//! Implementations can be HTTP clients, mock providers, etc.

use exchange_rates::ExchangeRateApiClient;

pub use exchange_rates::{ExchangeError, PairConversion};

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait ExchangeRateProvider: Send + Sync + 'static {
    /// Converts `amount` of `from` into `to` in a single provider call.
    ///
    /// Codes are passed exactly as given; callers normalize them first.
    async fn pair_conversion(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<PairConversion, ExchangeError>;
}

#[async_trait::async_trait]
impl ExchangeRateProvider for ExchangeRateApiClient {
    async fn pair_conversion(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<PairConversion, ExchangeError> {
        self.pair(from, to, amount).await
    }
}
