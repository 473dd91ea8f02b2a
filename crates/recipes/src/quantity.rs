//! Quantity value type: a numeric amount paired with a unit.

use serde::{Deserialize, Serialize};

use chocolab_core::{DomainError, DomainResult, ValueObject};

use crate::unit::Unit;

/// A numeric amount and a unit.
///
/// Construction is unchecked: zero is a meaningful amount (an empty
/// ingredient) and negative amounts are representable at this level.
/// Callers that need non-negative amounts validate at their own boundary
/// (see [`crate::Recipe::new`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub amount: f64,
    pub unit: Unit,
}

impl ValueObject for Quantity {}

impl Quantity {
    pub fn new(amount: f64, unit: Unit) -> Self {
        Self { amount, unit }
    }

    /// Grams shorthand, used pervasively by yield math.
    pub fn grams(amount: f64) -> Self {
        Self::new(amount, Unit::Gram)
    }

    /// Convert the quantity to a different unit, if conversion is supported.
    ///
    /// Only the mass pair gram<->kilogram is defined; every other
    /// (source, target) pair fails, including same-unit volume/count pairs.
    pub fn convert_to(&self, target: Unit) -> DomainResult<Quantity> {
        match (&self.unit, &target) {
            (Unit::Gram, Unit::Kilogram) => Ok(Quantity::new(self.amount / 1000.0, target)),
            (Unit::Kilogram, Unit::Gram) => Ok(Quantity::new(self.amount * 1000.0, target)),
            _ => Err(DomainError::unsupported_conversion(
                self.unit.symbol(),
                target.symbol(),
            )),
        }
    }

    /// Parse a quantity from a string like `"1.5 kg"`.
    ///
    /// Expects exactly two whitespace-separated tokens. The unit token is
    /// accepted verbatim, without checking it against the defined set; an
    /// unrecognized symbol surfaces later as an unsupported conversion.
    pub fn parse(s: &str) -> DomainResult<Quantity> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [amount, unit] = parts.as_slice() else {
            return Err(DomainError::parse("invalid format, expected '<amount> <unit>'"));
        };
        let amount: f64 = amount
            .parse()
            .map_err(|e| DomainError::parse(format!("invalid amount: {e}")))?;
        Ok(Quantity::new(amount, Unit::from(*unit)))
    }
}

impl core::fmt::Display for Quantity {
    /// Renders as `"<amount> <symbol>"` with minimal digits, e.g. `1.5 kg`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}
