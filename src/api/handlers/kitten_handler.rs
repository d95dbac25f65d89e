//! Kitten handlers.
//!
//! By-breed listing lives under `/kittens/by-breed/{breed_id}` so it can
//! never be confused with `/kittens/{kitten_id}`.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{ParsedPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Kitten, KittenCreate};
use crate::errors::AppResult;

/// Create kitten routes
pub fn kitten_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_kittens).post(create_kitten))
        .route("/by-breed/:breed_id", get(list_kittens_by_breed))
        .route(
            "/:kitten_id",
            get(get_kitten).put(update_kitten).delete(delete_kitten),
        )
}

/// List all kittens
#[utoipa::path(
    get,
    path = "/kittens",
    tag = "Kittens",
    responses(
        (status = 200, description = "All kittens (possibly empty)", body = Vec<Kitten>)
    )
)]
pub async fn list_kittens(State(state): State<AppState>) -> AppResult<Json<Vec<Kitten>>> {
    let kittens = state.kitten_service.list_kittens().await?;
    Ok(Json(kittens))
}

/// List kittens of one breed
#[utoipa::path(
    get,
    path = "/kittens/by-breed/{breed_id}",
    tag = "Kittens",
    params(
        ("breed_id" = i32, Path, description = "Breed ID")
    ),
    responses(
        (status = 200, description = "Kittens of the breed", body = Vec<Kitten>),
        (status = 404, description = "No kittens found")
    )
)]
pub async fn list_kittens_by_breed(
    State(state): State<AppState>,
    ParsedPath(breed_id): ParsedPath<i32>,
) -> AppResult<Json<Vec<Kitten>>> {
    let kittens = state.kitten_service.list_kittens_by_breed(breed_id).await?;
    Ok(Json(kittens))
}

/// Get kitten by ID
#[utoipa::path(
    get,
    path = "/kittens/{kitten_id}",
    tag = "Kittens",
    params(
        ("kitten_id" = i32, Path, description = "Kitten ID")
    ),
    responses(
        (status = 200, description = "Kitten", body = Kitten),
        (status = 404, description = "Kitten not found")
    )
)]
pub async fn get_kitten(
    State(state): State<AppState>,
    ParsedPath(kitten_id): ParsedPath<i32>,
) -> AppResult<Json<Kitten>> {
    let kitten = state.kitten_service.get_kitten(kitten_id).await?;
    Ok(Json(kitten))
}

/// Create a new kitten
#[utoipa::path(
    post,
    path = "/kittens",
    tag = "Kittens",
    request_body = KittenCreate,
    responses(
        (status = 201, description = "Kitten created", body = Kitten),
        (status = 422, description = "Unknown breed or malformed request body")
    )
)]
pub async fn create_kitten(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<KittenCreate>,
) -> AppResult<(StatusCode, Json<Kitten>)> {
    let kitten = state.kitten_service.create_kitten(payload).await?;
    Ok((StatusCode::CREATED, Json(kitten)))
}

/// Replace every field of a kitten
#[utoipa::path(
    put,
    path = "/kittens/{kitten_id}",
    tag = "Kittens",
    params(
        ("kitten_id" = i32, Path, description = "Kitten ID")
    ),
    request_body = KittenCreate,
    responses(
        (status = 200, description = "Kitten updated", body = Kitten),
        (status = 404, description = "Kitten not found"),
        (status = 422, description = "Unknown breed or malformed request body")
    )
)]
pub async fn update_kitten(
    State(state): State<AppState>,
    ParsedPath(kitten_id): ParsedPath<i32>,
    ValidatedJson(payload): ValidatedJson<KittenCreate>,
) -> AppResult<Json<Kitten>> {
    let kitten = state.kitten_service.update_kitten(kitten_id, payload).await?;
    Ok(Json(kitten))
}

/// Delete a kitten
#[utoipa::path(
    delete,
    path = "/kittens/{kitten_id}",
    tag = "Kittens",
    params(
        ("kitten_id" = i32, Path, description = "Kitten ID")
    ),
    responses(
        (status = 200, description = "Kitten as it was before deletion", body = Kitten),
        (status = 404, description = "Kitten not found")
    )
)]
pub async fn delete_kitten(
    State(state): State<AppState>,
    ParsedPath(kitten_id): ParsedPath<i32>,
) -> AppResult<Json<Kitten>> {
    let kitten = state.kitten_service.delete_kitten(kitten_id).await?;
    Ok(Json(kitten))
}
