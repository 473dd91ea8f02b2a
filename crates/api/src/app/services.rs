//! Store selection and the recipe service.

use std::sync::Arc;

use thiserror::Error;

use chocolab_core::{DomainError, RecipeId};
use chocolab_infra::{InMemoryRecipeStore, RecipeStore, StoreError};
use chocolab_recipes::{Recipe, TemplateRecipe};

use crate::app::dto::RecipeRequest;

/// Failure of a service operation: a domain rule or the store.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates the recipe domain against the persistence collaborator.
///
/// The instructions-required rule lives here, around the domain factory:
/// the factory checks name and ingredients, the service additionally
/// rejects missing instructions before create and update.
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, req: RecipeRequest) -> Result<Recipe, ServiceError> {
        if req.instructions.is_empty() {
            return Err(DomainError::InstructionsRequired.into());
        }

        let mut recipe = Recipe::new(
            req.name,
            req.description.unwrap_or_default(),
            req.ingredients,
        )?;
        recipe.instructions = req.instructions;

        Ok(self.store.create(recipe).await?)
    }

    pub async fn get_by_id(&self, id: RecipeId) -> Result<Recipe, ServiceError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Fetch a recipe and return it rescaled to the requested yield, via
    /// its template projection.
    pub async fn get_scaled(&self, id: RecipeId, batch_yield: f64) -> Result<Recipe, ServiceError> {
        let recipe = self.store.get_by_id(id).await?;
        Ok(recipe.to_template().to_recipe(batch_yield)?)
    }

    pub async fn get_template_by_id(&self, id: RecipeId) -> Result<TemplateRecipe, ServiceError> {
        let recipe = self.store.get_by_id(id).await?;
        Ok(recipe.to_template())
    }

    /// Update an existing recipe in place, preserving its identity and
    /// creation audit fields.
    pub async fn update(&self, id: RecipeId, req: RecipeRequest) -> Result<(), ServiceError> {
        if req.instructions.is_empty() {
            return Err(DomainError::InstructionsRequired.into());
        }

        let mut recipe = self.store.get_by_id(id).await?;
        recipe.apply_update(
            req.name,
            req.description.unwrap_or_default(),
            req.ingredients,
        )?;
        recipe.instructions = req.instructions;

        Ok(self.store.update(recipe).await?)
    }

    pub async fn delete(&self, id: RecipeId) -> Result<(), ServiceError> {
        Ok(self.store.delete(id).await?)
    }

    pub async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Recipe>, ServiceError> {
        Ok(self.store.list(limit, offset).await?)
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.store.count().await?)
    }
}

/// Build the recipe service with an env-selected store.
///
/// Defaults to the in-memory store. With the `postgres` feature compiled
/// in, `USE_PERSISTENT_STORE=true` plus `DATABASE_URL` selects Postgres;
/// misconfiguration logs a warning and falls back to memory.
pub async fn build_services() -> RecipeService {
    #[cfg(feature = "postgres")]
    {
        let use_persistent = std::env::var("USE_PERSISTENT_STORE")
            .map(|v| v == "true")
            .unwrap_or(false);
        if use_persistent {
            match std::env::var("DATABASE_URL") {
                Ok(url) => match connect_postgres(&url).await {
                    Ok(store) => {
                        tracing::info!("using postgres recipe store");
                        return RecipeService::new(Arc::new(store));
                    }
                    Err(e) => {
                        tracing::warn!("postgres store unavailable, using in-memory store: {e}");
                    }
                },
                Err(_) => {
                    tracing::warn!(
                        "USE_PERSISTENT_STORE=true but DATABASE_URL not set; using in-memory store"
                    );
                }
            }
        }
    }

    RecipeService::new(Arc::new(InMemoryRecipeStore::new()))
}

#[cfg(feature = "postgres")]
async fn connect_postgres(
    url: &str,
) -> Result<chocolab_infra::PostgresRecipeStore, StoreError> {
    let store = chocolab_infra::PostgresRecipeStore::connect(url).await?;
    store.migrate().await?;
    Ok(store)
}
