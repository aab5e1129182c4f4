//! Normalized currency codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An upper-cased currency code such as `USD`.
///
/// No ISO-4217 membership check is made here; the provider decides which
/// codes it supports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Normalizes a raw code. Returns `None` for a missing or empty input.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.filter(|code| !code.is_empty())
            .map(|code| Self(code.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
