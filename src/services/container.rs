//! Service Container - Centralized service access.
//!
//! Wires repositories to services once per process; handlers only ever
//! see the service traits.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{BreedManager, BreedService, KittenManager, KittenService};
use crate::infra::{BreedStore, KittenStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get breed service
    fn breeds(&self) -> Arc<dyn BreedService>;

    /// Get kitten service
    fn kittens(&self) -> Arc<dyn KittenService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    breed_service: Arc<dyn BreedService>,
    kitten_service: Arc<dyn KittenService>,
}

impl Services {
    /// Create service container backed by the given database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let breed_repo = Arc::new(BreedStore::new(db.clone()));
        let kitten_repo = Arc::new(KittenStore::new(db));

        Self {
            breed_service: Arc::new(BreedManager::new(breed_repo)),
            kitten_service: Arc::new(KittenManager::new(kitten_repo)),
        }
    }
}

impl ServiceContainer for Services {
    fn breeds(&self) -> Arc<dyn BreedService> {
        self.breed_service.clone()
    }

    fn kittens(&self) -> Arc<dyn KittenService> {
        self.kitten_service.clone()
    }
}
