//! Fixed-point money amount.
//!
//! Checkout amounts arrive as a currency code plus an integer whole-unit count
//! and an integer nano count (billionths of a unit). The representation is kept
//! as-is for persistence; [`Money::to_decimal`] exists for display and
//! reporting code that prefers decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fixed-point money amount.
///
/// `units` and `nanos` carry the same sign for a well-formed amount
/// (e.g. `-1.75` is `units: -1, nanos: -750_000_000`). Inputs are produced
/// upstream and treated as already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// ISO 4217 currency code (e.g. "USD").
    pub currency_code: String,
    /// Whole units of the amount.
    pub units: i64,
    /// Nano units (10^-9) of the amount.
    pub nanos: i32,
}

impl Money {
    /// Create a new money amount.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, units: i64, nanos: i32) -> Self {
        Self {
            currency_code: currency_code.into(),
            units,
            nanos,
        }
    }

    /// Convert to a decimal amount in the currency's standard unit.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self.units) + Decimal::new(i64::from(self.nanos), 9)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_decimal(), self.currency_code)
    }
}
