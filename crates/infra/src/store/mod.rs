//! Recipe storage abstractions.

pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use memory::InMemoryRecipeStore;

use async_trait::async_trait;
use thiserror::Error;

use chocolab_core::RecipeId;
use chocolab_recipes::Recipe;

/// Storage-level error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The identifier does not resolve to a stored recipe.
    #[error("recipe not found")]
    NotFound,

    /// A stored document could not be (de)serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The backing database failed.
    #[error("database error: {0}")]
    Database(String),
}

/// Persistence contract for recipes.
///
/// The store assigns identifiers at creation time and persists whatever
/// audit timestamps the domain set; it must not alter the derived
/// `cacao_percentage`/`batch_yield` fields.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Persist a new recipe, assigning an id if the recipe has none.
    async fn create(&self, recipe: Recipe) -> Result<Recipe, StoreError>;

    async fn get_by_id(&self, id: RecipeId) -> Result<Recipe, StoreError>;

    /// Replace a stored recipe. Fails with [`StoreError::NotFound`] when
    /// the recipe has no id or the id is unknown.
    async fn update(&self, recipe: Recipe) -> Result<(), StoreError>;

    async fn delete(&self, id: RecipeId) -> Result<(), StoreError>;

    /// List recipes in stable creation order.
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Recipe>, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}
