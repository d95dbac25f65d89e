//! Breed repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};

use super::entities::breed::{ActiveModel, Entity as BreedEntity};
use crate::domain::Breed;
use crate::errors::{constraint_violation, AppError, AppResult, ConstraintViolation};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Breed repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BreedRepository: Send + Sync {
    /// List every breed, in no particular order
    async fn list(&self) -> AppResult<Vec<Breed>>;

    /// Insert a breed; a taken name yields `AppError::Conflict`
    async fn create(&self, name: String) -> AppResult<Breed>;

    /// Delete a breed (kittens cascade) and return it as it was
    async fn delete(&self, id: i32) -> AppResult<Option<Breed>>;
}

/// SeaORM-backed implementation of BreedRepository
pub struct BreedStore {
    db: DatabaseConnection,
}

impl BreedStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BreedRepository for BreedStore {
    async fn list(&self) -> AppResult<Vec<Breed>> {
        let models = BreedEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Breed::from).collect())
    }

    async fn create(&self, name: String) -> AppResult<Breed> {
        let active_model = ActiveModel {
            name: Set(name.clone()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            match constraint_violation(&e) {
                Some(ConstraintViolation::Unique) => {
                    tracing::debug!(%name, "Rejected duplicate breed name");
                    AppError::conflict(format!("Breed '{}'", name))
                }
                _ => AppError::from(e),
            }
        })?;

        Ok(Breed::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<Option<Breed>> {
        let Some(model) = BreedEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let result = model.clone().delete(&self.db).await?;
        if result.rows_affected == 0 {
            // Removed concurrently between the read and the delete
            return Ok(None);
        }

        Ok(Some(Breed::from(model)))
    }
}
