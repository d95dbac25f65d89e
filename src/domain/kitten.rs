//! Kitten domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// An individual animal record, belonging to exactly one breed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Kitten {
    /// Storage-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Tom")]
    pub name: String,
    /// Identifier of the owning breed
    #[schema(example = 1)]
    pub breed_id: i32,
    /// Age in months
    #[schema(example = 3)]
    pub age_month: i32,
    #[schema(example = "playful")]
    pub description: String,
    #[schema(example = "grey")]
    pub color: String,
}

/// Kitten payload for both creation and full replacement.
///
/// Every field is required; updates overwrite all of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct KittenCreate {
    #[schema(example = "Tom")]
    pub name: String,
    /// Must reference an existing breed
    #[schema(example = 1)]
    pub breed_id: i32,
    #[schema(example = 3)]
    pub age_month: i32,
    #[schema(example = "playful")]
    pub description: String,
    #[schema(example = "grey")]
    pub color: String,
}

impl Kitten {
    /// Attach a storage identifier to a payload.
    pub fn from_fields(id: i32, fields: KittenCreate) -> Self {
        Self {
            id,
            name: fields.name,
            breed_id: fields.breed_id,
            age_month: fields.age_month,
            description: fields.description,
            color: fields.color,
        }
    }
}
