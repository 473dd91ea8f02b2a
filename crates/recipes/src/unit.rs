//! Measurement units used in recipes.

use serde::{Deserialize, Serialize};

/// A measurement unit symbol.
///
/// The known set covers mass, volume, and count symbols; `Other` carries an
/// unrecognized symbol verbatim so that parsed text is never rejected on
/// the unit token alone. Conversion rules are only defined for the two
/// mass units (see [`crate::Quantity::convert_to`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Cup,
    Tablespoon,
    Teaspoon,
    Piece,
    Other(String),
}

impl chocolab_core::ValueObject for Unit {}

impl Unit {
    /// The unit's text symbol as it appears on the wire and in quantity
    /// strings.
    pub fn symbol(&self) -> &str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Cup => "cup",
            Unit::Tablespoon => "tbsp",
            Unit::Teaspoon => "tsp",
            Unit::Piece => "piece",
            Unit::Other(s) => s,
        }
    }

    /// The fixed set of defined units.
    pub fn supported_units() -> Vec<Unit> {
        vec![
            Unit::Gram,
            Unit::Kilogram,
            Unit::Milliliter,
            Unit::Liter,
            Unit::Cup,
            Unit::Tablespoon,
            Unit::Teaspoon,
            Unit::Piece,
        ]
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl From<&str> for Unit {
    fn from(s: &str) -> Self {
        match s {
            "g" => Unit::Gram,
            "kg" => Unit::Kilogram,
            "ml" => Unit::Milliliter,
            "l" => Unit::Liter,
            "cup" => Unit::Cup,
            "tbsp" => Unit::Tablespoon,
            "tsp" => Unit::Teaspoon,
            "piece" => Unit::Piece,
            other => Unit::Other(other.to_string()),
        }
    }
}

impl From<String> for Unit {
    fn from(s: String) -> Self {
        Unit::from(s.as_str())
    }
}

impl From<Unit> for String {
    fn from(u: Unit) -> Self {
        u.symbol().to_string()
    }
}
