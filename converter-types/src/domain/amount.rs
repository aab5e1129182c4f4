//! Requested amount as it arrives in the JSON body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Amount supplied by the caller: a JSON number, a string, or anything else.
///
/// Strings are accepted because callers commonly send form-style values
/// (`"100"`). Other JSON values deserialize into `Other` so that they can be
/// rejected as bad input instead of failing the whole body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
    Other(Value),
}

impl AmountInput {
    /// Numeric zero, the empty string, `null` and `false` count as missing.
    pub fn is_falsy(&self) -> bool {
        match self {
            AmountInput::Number(n) => *n == 0.0,
            AmountInput::Text(s) => s.is_empty(),
            AmountInput::Other(Value::Null) => true,
            AmountInput::Other(Value::Bool(b)) => !b,
            AmountInput::Other(_) => false,
        }
    }

    /// Numeric value of the input, if it is a finite number.
    pub fn parse(&self) -> Option<f64> {
        match self {
            AmountInput::Number(n) => Some(*n).filter(|n| n.is_finite()),
            AmountInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite()),
            AmountInput::Other(_) => None,
        }
    }

    /// The amount to convert: present, not falsy, and numeric.
    ///
    /// Note that `"0"` is not falsy and yields `Some(0.0)`, while `0` does not.
    pub fn to_amount(&self) -> Option<f64> {
        if self.is_falsy() {
            return None;
        }
        self.parse()
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}
