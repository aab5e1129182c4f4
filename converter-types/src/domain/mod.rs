//! Domain inputs for the conversion service.

pub mod amount;
pub mod currency;

pub use amount::AmountInput;
pub use currency::CurrencyCode;
