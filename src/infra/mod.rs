//! Infrastructure layer - External systems integration
//!
//! This module handles the relational store:
//! - Database connections and schema migrations
//! - SeaORM entities and repositories

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{BreedRepository, BreedStore, KittenRepository, KittenStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockBreedRepository, MockKittenRepository};
