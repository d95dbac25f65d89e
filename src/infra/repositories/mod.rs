//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! They return `Option` for absent rows and leave the not-found policy
//! to the services; constraint violations are classified here.

mod breed_repository;
pub(crate) mod entities;
mod kitten_repository;

pub use breed_repository::{BreedRepository, BreedStore};
pub use kitten_repository::{KittenRepository, KittenStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use breed_repository::MockBreedRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use kitten_repository::MockKittenRepository;
