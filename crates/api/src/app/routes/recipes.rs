use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use chocolab_core::RecipeId;

use crate::app::dto::{GetParams, ListParams, RecipeRequest};
use crate::app::errors;
use crate::app::services::RecipeService;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_recipe).get(list_recipes))
        .route("/count", get(count_recipes))
        .route(
            "/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route("/:id/template", get(get_recipe_template))
}

fn parse_id(id: &str) -> Result<RecipeId, axum::response::Response> {
    id.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid recipe id")
    })
}

pub async fn create_recipe(
    Extension(services): Extension<Arc<RecipeService>>,
    Json(body): Json<RecipeRequest>,
) -> axum::response::Response {
    match services.create(body).await {
        Ok(recipe) => (StatusCode::CREATED, Json(recipe)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_recipe(
    Extension(services): Extension<Arc<RecipeService>>,
    Path(id): Path<String>,
    Query(params): Query<GetParams>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let result = match params.batch_yield {
        Some(batch_yield) => services.get_scaled(id, batch_yield).await,
        None => services.get_by_id(id).await,
    };

    match result {
        Ok(recipe) => Json(recipe).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_recipe_template(
    Extension(services): Extension<Arc<RecipeService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.get_template_by_id(id).await {
        Ok(template) => Json(template).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn update_recipe(
    Extension(services): Extension<Arc<RecipeService>>,
    Path(id): Path<String>,
    Json(body): Json<RecipeRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.update(id, body).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_recipe(
    Extension(services): Extension<Arc<RecipeService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_recipes(
    Extension(services): Extension<Arc<RecipeService>>,
    Query(params): Query<ListParams>,
) -> axum::response::Response {
    match services.list(params.limit, params.offset).await {
        Ok(recipes) => Json(recipes).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn count_recipes(
    Extension(services): Extension<Arc<RecipeService>>,
) -> axum::response::Response {
    match services.count().await {
        Ok(count) => Json(serde_json::json!({ "count": count })).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
