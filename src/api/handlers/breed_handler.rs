//! Breed handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};

use crate::api::extractors::{ParsedPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Breed, BreedCreate};
use crate::errors::AppResult;

/// Create breed routes
pub fn breed_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_breeds).post(create_breed))
        .route("/:breed_id", delete(delete_breed))
}

/// List all breeds
#[utoipa::path(
    get,
    path = "/breeds",
    tag = "Breeds",
    responses(
        (status = 200, description = "All breeds (possibly empty)", body = Vec<Breed>)
    )
)]
pub async fn list_breeds(State(state): State<AppState>) -> AppResult<Json<Vec<Breed>>> {
    let breeds = state.breed_service.list_breeds().await?;
    Ok(Json(breeds))
}

/// Create a new breed
#[utoipa::path(
    post,
    path = "/breeds",
    tag = "Breeds",
    request_body = BreedCreate,
    responses(
        (status = 201, description = "Breed created", body = Breed),
        (status = 409, description = "A breed with this name already exists"),
        (status = 422, description = "Malformed request body")
    )
)]
pub async fn create_breed(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BreedCreate>,
) -> AppResult<(StatusCode, Json<Breed>)> {
    let breed = state.breed_service.create_breed(payload).await?;
    Ok((StatusCode::CREATED, Json(breed)))
}

/// Delete a breed and every kitten that belongs to it
#[utoipa::path(
    delete,
    path = "/breeds/{breed_id}",
    tag = "Breeds",
    params(
        ("breed_id" = i32, Path, description = "Breed ID")
    ),
    responses(
        (status = 200, description = "Deleted breed", body = Breed),
        (status = 404, description = "Breed not found")
    )
)]
pub async fn delete_breed(
    State(state): State<AppState>,
    ParsedPath(breed_id): ParsedPath<i32>,
) -> AppResult<Json<Breed>> {
    let breed = state.breed_service.delete_breed(breed_id).await?;
    Ok(Json(breed))
}
