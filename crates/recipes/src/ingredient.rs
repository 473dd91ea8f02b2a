//! Recipe ingredients.

use serde::{Deserialize, Serialize};

use chocolab_core::ValueObject;

use crate::quantity::Quantity;

/// A single ingredient and its quantity.
///
/// Has no identity of its own; position in the owning recipe's ordered
/// ingredient list is meaningful for display only, never for computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    /// Whether this ingredient counts toward cacao content.
    pub is_cacao: bool,
    pub quantity: Quantity,
}

impl ValueObject for Ingredient {}

impl Ingredient {
    pub fn new(name: impl Into<String>, is_cacao: bool, quantity: Quantity) -> Self {
        Self {
            name: name.into(),
            is_cacao,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::Unit;

    #[test]
    fn serializes_with_camel_case_fields() {
        let ing = Ingredient::new("Cacao", true, Quantity::new(40.0, Unit::Gram));
        let json = serde_json::to_value(&ing).unwrap();
        assert_eq!(json["name"], "Cacao");
        assert_eq!(json["isCacao"], true);
        assert_eq!(json["quantity"]["amount"], 40.0);
        assert_eq!(json["quantity"]["unit"], "g");
    }
}
