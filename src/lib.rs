//! Kitten API - REST backend for cat breeds and kittens
//!
//! Two related entities (breeds and the kittens that belong to them)
//! exposed over HTTP/JSON with Axum and persisted through SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Breed and kitten entities and request schemas
//! - **services**: Use cases and not-found policy
//! - **infra**: Database, migrations, entities and repositories
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (applies pending migrations first)
//! cargo run -- serve
//!
//! # Manage the schema explicitly
//! cargo run -- migrate status
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Breed, BreedCreate, Kitten, KittenCreate};
pub use errors::{AppError, AppResult};
pub use infra::Database;
