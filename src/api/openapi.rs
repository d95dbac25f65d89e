//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{breed_handler, health_handler, kitten_handler};
use crate::domain::{Breed, BreedCreate, Kitten, KittenCreate};

/// OpenAPI documentation for the Kitten API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kitten API",
        version = "0.1.0",
        description = "CRUD API for cat breeds and kittens",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        health_handler::root,
        health_handler::health,
        // Breed endpoints
        breed_handler::list_breeds,
        breed_handler::create_breed,
        breed_handler::delete_breed,
        // Kitten endpoints
        kitten_handler::list_kittens,
        kitten_handler::list_kittens_by_breed,
        kitten_handler::get_kitten,
        kitten_handler::create_kitten,
        kitten_handler::update_kitten,
        kitten_handler::delete_kitten,
    ),
    components(
        schemas(
            Breed,
            BreedCreate,
            Kitten,
            KittenCreate,
            health_handler::MessageResponse,
            health_handler::HealthResponse,
            health_handler::ServiceHealth,
            health_handler::ServiceStatus,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and database health"),
        (name = "Breeds", description = "Cat breed management"),
        (name = "Kittens", description = "Kitten management")
    )
)]
pub struct ApiDoc;
