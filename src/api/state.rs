//! Application state - Dependency injection container.
//!
//! Cloned into every request; holds no mutable state of its own.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{BreedService, KittenService, ServiceContainer, Services};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Breed service
    pub breed_service: Arc<dyn BreedService>,
    /// Kitten service
    pub kitten_service: Arc<dyn KittenService>,
    /// Database handle (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state with SeaORM-backed services.
    pub fn from_database(database: Arc<Database>) -> Self {
        let services = Services::from_connection(database.get_connection());
        Self::from_container(&services, database)
    }

    /// Create application state from any service container.
    pub fn from_container(services: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self::new(services.breeds(), services.kittens(), database)
    }

    /// Create new application state with manually injected services.
    pub fn new(
        breed_service: Arc<dyn BreedService>,
        kitten_service: Arc<dyn KittenService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            breed_service,
            kitten_service,
            database,
        }
    }
}
