//! Application services layer - Use cases.
//!
//! Services sit between the HTTP handlers and the repositories and
//! translate absent rows into typed not-found failures. They depend on
//! repository traits, not implementations.

mod breed_service;
pub mod container;
mod kitten_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use breed_service::{BreedManager, BreedService};
pub use kitten_service::{KittenManager, KittenService};
