//! # Converter Types
//!
//! Domain types and port traits for the currency conversion service.
//! This crate performs no IO itself - only data structures, validation
//! rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Input types (currency codes, amounts)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Request, result and response envelopes for the HTTP boundary
//! - `error/` - The four-kind service error taxonomy

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{AmountInput, CurrencyCode};
pub use dto::*;
pub use error::ServiceError;
pub use ports::{ExchangeError, ExchangeRateProvider, PairConversion};
