//! Recipe entity: validating factory and derived-field math.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chocolab_core::{DomainError, DomainResult, RecipeId};

use crate::ingredient::Ingredient;
use crate::quantity::Quantity;
use crate::template::{TemplateIngredient, TemplateRecipe};

/// A complete recipe.
///
/// `cacao_percentage` and `batch_yield` are derived from the ingredient
/// list; they are computed by the factory and recomputed on every mutation
/// through the same pure functions, never assigned independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Assigned by the storage collaborator at creation time.
    pub id: Option<RecipeId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub updated_by: String,
    /// Share of total mass contributed by cacao-flagged ingredients, in [0,100].
    pub cacao_percentage: f64,
    /// Total mass of the recipe in grams, the scaling basis for templates.
    #[serde(rename = "yield")]
    pub batch_yield: Quantity,
}

impl Recipe {
    /// Validating factory: the only way to construct a recipe.
    ///
    /// Checks name and ingredients; the instructions-required rule is
    /// enforced by the service layer around create/update, not here.
    /// Derived fields are computed from the ingredient list on success.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        ingredients: Vec<Ingredient>,
    ) -> DomainResult<Recipe> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::NameRequired);
        }
        if ingredients.is_empty() {
            return Err(DomainError::IngredientsRequired);
        }
        validate_amounts(&ingredients)?;

        let now = Utc::now();
        Ok(Recipe {
            id: None,
            name,
            description: description.into(),
            cacao_percentage: cacao_percentage_of(&ingredients),
            batch_yield: yield_of(&ingredients),
            ingredients,
            instructions: String::new(),
            created_at: now,
            updated_at: now,
            created_by: String::new(),
            updated_by: String::new(),
        })
    }

    /// Replace the editable fields, re-validate, and re-derive.
    ///
    /// Identity, creation timestamp, and creator attribution are preserved;
    /// `updated_at` is refreshed.
    pub fn apply_update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        ingredients: Vec<Ingredient>,
    ) -> DomainResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::NameRequired);
        }
        if ingredients.is_empty() {
            return Err(DomainError::IngredientsRequired);
        }
        validate_amounts(&ingredients)?;

        self.name = name;
        self.description = description.into();
        self.cacao_percentage = cacao_percentage_of(&ingredients);
        self.batch_yield = yield_of(&ingredients);
        self.ingredients = ingredients;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Recompute the cacao percentage from the current ingredient list.
    ///
    /// Pure and idempotent; returns 0 when total mass is 0.
    pub fn calculate_cacao_percentage(&self) -> f64 {
        cacao_percentage_of(&self.ingredients)
    }

    /// Recompute the yield in grams from the current ingredient list.
    pub fn calculate_yield(&self) -> Quantity {
        yield_of(&self.ingredients)
    }

    /// Project into a scale-free percentage template.
    ///
    /// Each ingredient's percentage is its share of the recipe's total
    /// mass (0 when total mass is 0); the already-computed cacao
    /// percentage is copied verbatim, not recomputed. The result is a
    /// snapshot: later edits to this recipe do not flow into it.
    pub fn to_template(&self) -> TemplateRecipe {
        let total: f64 = self.ingredients.iter().map(|i| i.quantity.amount).sum();
        let ingredients = self
            .ingredients
            .iter()
            .map(|i| TemplateIngredient {
                name: i.name.clone(),
                is_cacao: i.is_cacao,
                percentage: if total > 0.0 {
                    i.quantity.amount / total * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        TemplateRecipe {
            recipe_id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            instructions: self.instructions.clone(),
            cacao_percentage: self.cacao_percentage,
            ingredients,
        }
    }
}

/// Cacao share of total mass, in [0,100]; 0 when total mass is 0.
fn cacao_percentage_of(ingredients: &[Ingredient]) -> f64 {
    let mut total = 0.0;
    let mut cacao = 0.0;
    for ingredient in ingredients {
        total += ingredient.quantity.amount;
        if ingredient.is_cacao {
            cacao += ingredient.quantity.amount;
        }
    }
    if total == 0.0 {
        return 0.0; // avoid division by zero
    }
    cacao / total * 100.0
}

/// Total mass in grams.
///
/// Amounts are summed as raw numbers without converting between the
/// ingredients' declared units; mixing units therefore skews the total.
/// Preserved behavior, see DESIGN.md.
fn yield_of(ingredients: &[Ingredient]) -> Quantity {
    Quantity::grams(ingredients.iter().map(|i| i.quantity.amount).sum())
}

fn validate_amounts(ingredients: &[Ingredient]) -> DomainResult<()> {
    for ingredient in ingredients {
        if ingredient.quantity.amount < 0.0 {
            return Err(DomainError::validation(format!(
                "ingredient '{}' has a negative amount",
                ingredient.name
            )));
        }
    }
    Ok(())
}
