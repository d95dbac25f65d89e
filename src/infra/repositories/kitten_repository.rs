//! Kitten repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, Set,
};

use super::entities::kitten::{self, ActiveModel, Entity as KittenEntity};
use crate::domain::{Kitten, KittenCreate};
use crate::errors::{constraint_violation, AppError, AppResult, ConstraintViolation};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Kitten repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait KittenRepository: Send + Sync {
    /// List every kitten, in no particular order
    async fn list(&self) -> AppResult<Vec<Kitten>>;

    /// List kittens whose `breed_id` matches
    async fn list_by_breed(&self, breed_id: i32) -> AppResult<Vec<Kitten>>;

    /// Find kitten by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Kitten>>;

    /// Insert a kitten; a dangling `breed_id` yields `AppError::Validation`
    async fn create(&self, fields: KittenCreate) -> AppResult<Kitten>;

    /// Overwrite every mutable field; `None` if the kitten does not exist
    async fn update(&self, id: i32, fields: KittenCreate) -> AppResult<Option<Kitten>>;

    /// Delete a kitten and return it as it was; `None` if it does not exist
    async fn delete(&self, id: i32) -> AppResult<Option<Kitten>>;
}

/// SeaORM-backed implementation of KittenRepository
pub struct KittenStore {
    db: DatabaseConnection,
}

impl KittenStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map a rejected kitten write, naming the breed a foreign-key failure points at.
fn write_error(err: DbErr, breed_id: i32) -> AppError {
    match constraint_violation(&err) {
        Some(ConstraintViolation::ForeignKey) => {
            AppError::validation(format!("Breed {} does not exist", breed_id))
        }
        _ => AppError::from(err),
    }
}

#[async_trait]
impl KittenRepository for KittenStore {
    async fn list(&self) -> AppResult<Vec<Kitten>> {
        let models = KittenEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Kitten::from).collect())
    }

    async fn list_by_breed(&self, breed_id: i32) -> AppResult<Vec<Kitten>> {
        let models = KittenEntity::find()
            .filter(kitten::Column::BreedId.eq(breed_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Kitten::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Kitten>> {
        let result = KittenEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Kitten::from))
    }

    async fn create(&self, fields: KittenCreate) -> AppResult<Kitten> {
        let breed_id = fields.breed_id;
        let active_model = ActiveModel {
            name: Set(fields.name),
            breed_id: Set(fields.breed_id),
            age_month: Set(fields.age_month),
            description: Set(fields.description),
            color: Set(fields.color),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, breed_id))?;

        Ok(Kitten::from(model))
    }

    async fn update(&self, id: i32, fields: KittenCreate) -> AppResult<Option<Kitten>> {
        let Some(kitten) = KittenEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let breed_id = fields.breed_id;
        let mut active: ActiveModel = kitten.into();
        active.name = Set(fields.name);
        active.breed_id = Set(fields.breed_id);
        active.age_month = Set(fields.age_month);
        active.description = Set(fields.description);
        active.color = Set(fields.color);

        match active.update(&self.db).await {
            Ok(model) => Ok(Some(Kitten::from(model))),
            // Removed concurrently between the read and the update
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(write_error(e, breed_id)),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<Option<Kitten>> {
        let Some(model) = KittenEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let result = model.clone().delete(&self.db).await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(Kitten::from(model)))
    }
}
