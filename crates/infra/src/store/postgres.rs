//! Postgres-backed recipe store.
//!
//! Recipes are stored as one JSONB document per row, keyed by id. The
//! domain object is the document; the store only assigns identifiers and
//! mirrors the audit timestamps into indexed columns for ordering.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use chocolab_core::RecipeId;
use chocolab_recipes::Recipe;

use super::{RecipeStore, StoreError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS recipes (
    id          UUID PRIMARY KEY,
    doc         JSONB NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL,
    updated_at  TIMESTAMPTZ NOT NULL
)
"#;

/// Postgres document store for recipes.
///
/// Uses the SQLx connection pool; safe to clone and share across tasks.
#[derive(Debug, Clone)]
pub struct PostgresRecipeStore {
    pool: PgPool,
}

impl PostgresRecipeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(url).await.map_err(db_err)?;
        Ok(Self::new(pool))
    }

    /// Create the recipes table if it does not exist. Idempotent.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}

fn db_err(e: sqlx::Error) -> StoreError {
    StoreError::Database(e.to_string())
}

fn to_doc(recipe: &Recipe) -> Result<serde_json::Value, StoreError> {
    serde_json::to_value(recipe).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn from_doc(doc: serde_json::Value) -> Result<Recipe, StoreError> {
    serde_json::from_value(doc).map_err(|e| StoreError::Serialization(e.to_string()))
}

#[async_trait]
impl RecipeStore for PostgresRecipeStore {
    #[tracing::instrument(skip(self, recipe))]
    async fn create(&self, mut recipe: Recipe) -> Result<Recipe, StoreError> {
        let id = recipe.id.unwrap_or_else(RecipeId::new);
        recipe.id = Some(id);

        sqlx::query(
            "INSERT INTO recipes (id, doc, created_at, updated_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(*id.as_uuid())
        .bind(to_doc(&recipe)?)
        .bind(recipe.created_at)
        .bind(recipe.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(recipe)
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: RecipeId) -> Result<Recipe, StoreError> {
        let row = sqlx::query("SELECT doc FROM recipes WHERE id = $1")
            .bind(*id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .ok_or(StoreError::NotFound)?;

        from_doc(row.try_get("doc").map_err(db_err)?)
    }

    #[tracing::instrument(skip(self, recipe))]
    async fn update(&self, recipe: Recipe) -> Result<(), StoreError> {
        let id = recipe.id.ok_or(StoreError::NotFound)?;

        let result = sqlx::query("UPDATE recipes SET doc = $2, updated_at = $3 WHERE id = $1")
            .bind(*id.as_uuid())
            .bind(to_doc(&recipe)?)
            .bind(recipe.updated_at)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: RecipeId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(*id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Recipe>, StoreError> {
        // Saturate rather than wrap: a u64 above i64::MAX is an absurd page,
        // not a database error.
        let rows = sqlx::query("SELECT doc FROM recipes ORDER BY created_at, id LIMIT $1 OFFSET $2")
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .bind(i64::try_from(offset).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.into_iter()
            .map(|row| from_doc(row.try_get("doc").map_err(db_err)?))
            .collect()
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes")
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(count as u64)
    }
}
