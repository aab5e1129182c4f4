//! # Converter Hex
//!
//! Application service layer and HTTP adapter for the currency converter.
//!
//! ## Architecture
//!
//! - `service/` - Conversion service (validation and provider result mapping)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served by the HTTP adapter
//!
//! The service is generic over `P: ExchangeRateProvider`, allowing
//! different provider implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::CurrencyService;
