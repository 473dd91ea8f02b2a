//! Scale-free recipe templates.
//!
//! A template stores each ingredient as a percentage of total mass rather
//! than an absolute quantity, so a recipe can be reproduced at any target
//! batch size.

use serde::{Deserialize, Serialize};

use chocolab_core::{DomainError, DomainResult, RecipeId, ValueObject};

use crate::ingredient::Ingredient;
use crate::quantity::Quantity;
use crate::recipe::Recipe;

/// An ingredient expressed as a percentage of the recipe's total mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateIngredient {
    pub name: String,
    pub is_cacao: bool,
    /// Share of total mass in [0,100] at projection time.
    pub percentage: f64,
}

impl ValueObject for TemplateIngredient {}

/// A percentage-based projection of a [`Recipe`].
///
/// Derived from exactly one recipe at projection time and never kept in
/// sync with later edits; `recipe_id` is a lookup key back to the source,
/// not an ownership relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecipe {
    pub recipe_id: Option<RecipeId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    /// Copied verbatim from the source recipe.
    pub cacao_percentage: f64,
    pub ingredients: Vec<TemplateIngredient>,
}

impl TemplateRecipe {
    /// Reconstitute a concrete recipe at the given yield (grams).
    ///
    /// Each amount is `percentage * yield / 100` in grams. Identity, the
    /// instructions, and the cacao percentage are carried over verbatim;
    /// name and description are annotated with the target batch size.
    /// A non-positive or non-finite yield is rejected rather than producing
    /// a degenerate zero-, negative-, NaN-, or infinite-quantity recipe.
    pub fn to_recipe(&self, batch_yield: f64) -> DomainResult<Recipe> {
        if !batch_yield.is_finite() || batch_yield <= 0.0 {
            return Err(DomainError::validation(format!(
                "yield must be a positive finite number, got {batch_yield}"
            )));
        }

        let ingredients: Vec<Ingredient> = self
            .ingredients
            .iter()
            .map(|i| {
                Ingredient::new(
                    i.name.clone(),
                    i.is_cacao,
                    Quantity::grams(i.percentage * batch_yield / 100.0),
                )
            })
            .collect();

        let name = format!("{} ({} g)", self.name, batch_yield);
        let description = if self.description.is_empty() {
            format!("Scaled to {batch_yield} g.")
        } else {
            format!("{} (scaled to {batch_yield} g)", self.description)
        };

        let mut recipe = Recipe::new(name, description, ingredients)?;
        recipe.id = self.recipe_id;
        recipe.instructions = self.instructions.clone();
        // Copied verbatim, not recomputed: the template is a snapshot of the
        // source recipe's derived values.
        recipe.cacao_percentage = self.cacao_percentage;
        recipe.batch_yield = Quantity::grams(batch_yield);
        Ok(recipe)
    }
}
