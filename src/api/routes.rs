//! Application route configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{breed_routes, health, kitten_routes, root};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{OPENAPI_JSON_PATH, SWAGGER_UI_PATH};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness and health endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        // Domain routes
        .nest("/breeds", breed_routes())
        .nest("/kittens", kitten_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
