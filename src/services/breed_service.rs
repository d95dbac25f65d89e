//! Breed service - Breed use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Breed, BreedCreate};
use crate::errors::{AppResult, OptionExt};
use crate::infra::BreedRepository;

/// Breed service trait for dependency injection.
#[async_trait]
pub trait BreedService: Send + Sync {
    /// List all breeds; an empty store yields an empty list
    async fn list_breeds(&self) -> AppResult<Vec<Breed>>;

    /// Create a breed; fails with `Conflict` on a taken name
    async fn create_breed(&self, breed: BreedCreate) -> AppResult<Breed>;

    /// Delete a breed together with its kittens
    async fn delete_breed(&self, id: i32) -> AppResult<Breed>;
}

/// Concrete implementation of BreedService.
pub struct BreedManager {
    repo: Arc<dyn BreedRepository>,
}

impl BreedManager {
    /// Create new breed service instance
    pub fn new(repo: Arc<dyn BreedRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl BreedService for BreedManager {
    async fn list_breeds(&self) -> AppResult<Vec<Breed>> {
        self.repo.list().await
    }

    async fn create_breed(&self, breed: BreedCreate) -> AppResult<Breed> {
        let created = self.repo.create(breed.name).await?;
        tracing::info!(breed_id = created.id, name = %created.name, "Breed created");
        Ok(created)
    }

    async fn delete_breed(&self, id: i32) -> AppResult<Breed> {
        let deleted = self.repo.delete(id).await?.ok_or_not_found("Breed not found")?;
        tracing::info!(breed_id = id, "Breed deleted");
        Ok(deleted)
    }
}
