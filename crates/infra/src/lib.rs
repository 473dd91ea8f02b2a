//! Infrastructure layer: recipe persistence adapters.

pub mod store;

pub use store::{InMemoryRecipeStore, RecipeStore, StoreError};

#[cfg(feature = "postgres")]
pub use store::postgres::PostgresRecipeStore;
