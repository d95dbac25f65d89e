//! Kitten service - Kitten use cases.
//!
//! Owns the not-found policy: single-kitten lookups fail on a missing
//! id, and a by-breed lookup fails when it matches nothing, while the
//! unfiltered listing never does.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Kitten, KittenCreate};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::KittenRepository;

const KITTEN_NOT_FOUND: &str = "Kitten not found";

/// Kitten service trait for dependency injection.
#[async_trait]
pub trait KittenService: Send + Sync {
    /// List all kittens; an empty store yields an empty list
    async fn list_kittens(&self) -> AppResult<Vec<Kitten>>;

    /// List kittens of one breed; fails with `NotFound` when none match
    async fn list_kittens_by_breed(&self, breed_id: i32) -> AppResult<Vec<Kitten>>;

    /// Get kitten by ID
    async fn get_kitten(&self, id: i32) -> AppResult<Kitten>;

    /// Create a kitten; fails with `Validation` on an unknown breed
    async fn create_kitten(&self, fields: KittenCreate) -> AppResult<Kitten>;

    /// Replace every field of an existing kitten
    async fn update_kitten(&self, id: i32, fields: KittenCreate) -> AppResult<Kitten>;

    /// Delete a kitten, returning its last state
    async fn delete_kitten(&self, id: i32) -> AppResult<Kitten>;
}

/// Concrete implementation of KittenService.
pub struct KittenManager {
    repo: Arc<dyn KittenRepository>,
}

impl KittenManager {
    /// Create new kitten service instance
    pub fn new(repo: Arc<dyn KittenRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl KittenService for KittenManager {
    async fn list_kittens(&self) -> AppResult<Vec<Kitten>> {
        self.repo.list().await
    }

    async fn list_kittens_by_breed(&self, breed_id: i32) -> AppResult<Vec<Kitten>> {
        let kittens = self.repo.list_by_breed(breed_id).await?;
        if kittens.is_empty() {
            return Err(AppError::not_found("No kittens found"));
        }
        Ok(kittens)
    }

    async fn get_kitten(&self, id: i32) -> AppResult<Kitten> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(KITTEN_NOT_FOUND)
    }

    async fn create_kitten(&self, fields: KittenCreate) -> AppResult<Kitten> {
        let kitten = self.repo.create(fields).await?;
        tracing::info!(kitten_id = kitten.id, breed_id = kitten.breed_id, "Kitten created");
        Ok(kitten)
    }

    async fn update_kitten(&self, id: i32, fields: KittenCreate) -> AppResult<Kitten> {
        let kitten = self
            .repo
            .update(id, fields)
            .await?
            .ok_or_not_found(KITTEN_NOT_FOUND)?;
        tracing::info!(kitten_id = id, "Kitten updated");
        Ok(kitten)
    }

    async fn delete_kitten(&self, id: i32) -> AppResult<Kitten> {
        let kitten = self
            .repo
            .delete(id)
            .await?
            .ok_or_not_found(KITTEN_NOT_FOUND)?;
        tracing::info!(kitten_id = id, "Kitten deleted");
        Ok(kitten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockKittenRepository;
    use mockall::predicate::eq;

    fn fields(breed_id: i32) -> KittenCreate {
        KittenCreate {
            name: "Tom".to_string(),
            breed_id,
            age_month: 3,
            description: "playful".to_string(),
            color: "grey".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_kittens_empty_is_ok() {
        let mut repo = MockKittenRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));

        let service = KittenManager::new(Arc::new(repo));
        assert!(service.list_kittens().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_breed_empty_is_not_found() {
        let mut repo = MockKittenRepository::new();
        repo.expect_list_by_breed()
            .with(eq(5))
            .returning(|_| Ok(vec![]));

        let service = KittenManager::new(Arc::new(repo));
        let err = service.list_kittens_by_breed(5).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref m) if m == "No kittens found"));
    }

    #[tokio::test]
    async fn test_list_by_breed_returns_matches() {
        let mut repo = MockKittenRepository::new();
        repo.expect_list_by_breed()
            .with(eq(2))
            .returning(|breed_id| Ok(vec![Kitten::from_fields(1, fields(breed_id))]));

        let service = KittenManager::new(Arc::new(repo));
        let kittens = service.list_kittens_by_breed(2).await.unwrap();

        assert_eq!(kittens.len(), 1);
        assert_eq!(kittens[0].breed_id, 2);
    }

    #[tokio::test]
    async fn test_get_kitten_not_found() {
        let mut repo = MockKittenRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = KittenManager::new(Arc::new(repo));
        let err = service.get_kitten(9).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref m) if m == "Kitten not found"));
    }

    #[tokio::test]
    async fn test_update_missing_kitten_is_not_found() {
        let mut repo = MockKittenRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let service = KittenManager::new(Arc::new(repo));
        let err = service.update_kitten(9, fields(1)).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let mut repo = MockKittenRepository::new();
        repo.expect_update()
            .with(eq(1), eq(fields(3)))
            .returning(|id, f| Ok(Some(Kitten::from_fields(id, f))));

        let service = KittenManager::new(Arc::new(repo));
        let kitten = service.update_kitten(1, fields(3)).await.unwrap();

        assert_eq!(kitten, Kitten::from_fields(1, fields(3)));
    }

    #[tokio::test]
    async fn test_create_with_unknown_breed_propagates_validation() {
        let mut repo = MockKittenRepository::new();
        repo.expect_create()
            .returning(|f| Err(AppError::validation(format!("Breed {} does not exist", f.breed_id))));

        let service = KittenManager::new(Arc::new(repo));
        let err = service.create_kitten(fields(99)).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(ref m) if m == "Breed 99 does not exist"));
    }

    #[tokio::test]
    async fn test_delete_returns_last_state() {
        let mut repo = MockKittenRepository::new();
        repo.expect_delete()
            .with(eq(4))
            .returning(|id| Ok(Some(Kitten::from_fields(id, fields(1)))));

        let service = KittenManager::new(Arc::new(repo));
        let kitten = service.delete_kitten(4).await.unwrap();

        assert_eq!(kitten.id, 4);
        assert_eq!(kitten.name, "Tom");
    }
}
