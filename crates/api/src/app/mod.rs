//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store selection and the recipe service (orchestration)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and query parameters
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Store selection is env-driven; see [`services::build_services`].
pub async fn build_app() -> Router {
    let services = Arc::new(services::build_services().await);
    build_app_with(services)
}

/// Build the router around an explicit service (used by tests).
pub fn build_app_with(services: Arc<services::RecipeService>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/recipes", routes::recipes::router())
        .layer(Extension(services))
}
