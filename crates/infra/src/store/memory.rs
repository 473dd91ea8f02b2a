//! In-memory recipe store for dev/test.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use chocolab_core::RecipeId;
use chocolab_recipes::Recipe;

use super::{RecipeStore, StoreError};

/// In-memory store backed by a `BTreeMap`.
///
/// UUIDv7 keys are time-ordered, so map iteration order is creation order
/// and `list` pagination is stable without extra bookkeeping.
#[derive(Debug, Default)]
pub struct InMemoryRecipeStore {
    inner: RwLock<BTreeMap<RecipeId, Recipe>>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn create(&self, mut recipe: Recipe) -> Result<Recipe, StoreError> {
        let id = recipe.id.unwrap_or_else(RecipeId::new);
        recipe.id = Some(id);

        let mut map = self
            .inner
            .write()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        map.insert(id, recipe.clone());
        Ok(recipe)
    }

    async fn get_by_id(&self, id: RecipeId) -> Result<Recipe, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        map.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn update(&self, recipe: Recipe) -> Result<(), StoreError> {
        let id = recipe.id.ok_or(StoreError::NotFound)?;
        let mut map = self
            .inner
            .write()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        if !map.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        map.insert(id, recipe);
        Ok(())
    }

    async fn delete(&self, id: RecipeId) -> Result<(), StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        map.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Recipe>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(map
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(map.len() as u64)
    }
}
