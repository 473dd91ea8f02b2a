//! Recipes domain module.
//!
//! This crate contains the business rules for chocolate/confectionery
//! recipes, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage). The two transformations that matter live here:
//! deriving cacao percentage and total yield from a list of ingredient
//! quantities, and projecting a recipe into a scale-free percentage
//! template that can be reconstituted at any target batch size.

pub mod ingredient;
pub mod quantity;
pub mod recipe;
pub mod template;
pub mod unit;

pub use ingredient::Ingredient;
pub use quantity::Quantity;
pub use recipe::Recipe;
pub use template::{TemplateIngredient, TemplateRecipe};
pub use unit::Unit;
