//! Breed domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A category of cat, uniquely named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Breed {
    /// Storage-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Unique breed name
    #[schema(example = "Siamese")]
    pub name: String,
}

/// Breed creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BreedCreate {
    /// Unique breed name
    #[schema(example = "Siamese")]
    pub name: String,
}
