//! Request DTOs and query parameters.
//!
//! These are plain boundary shapes; the domain factory in
//! `chocolab-recipes` is the only place invariants are enforced, so a DTO
//! can never smuggle an invalid recipe past validation.

use serde::Deserialize;

use chocolab_recipes::Ingredient;

/// Request body for creating or updating a recipe.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ingredients: Vec<Ingredient>,
    /// Defaults to empty so that a missing field surfaces as the
    /// instructions-required domain error rather than a decode failure.
    #[serde(default)]
    pub instructions: String,
}

/// Pagination for `GET /recipes`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> u64 {
    10
}

/// Optional scaling for `GET /recipes/:id`.
#[derive(Debug, Deserialize)]
pub struct GetParams {
    /// Target batch yield in grams; when present the recipe is returned
    /// rescaled through its template.
    #[serde(rename = "yield")]
    pub batch_yield: Option<f64>,
}
