//! Kitten database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Kitten;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "kitten")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub breed_id: i32,
    pub age_month: i32,
    pub description: String,
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::breed::Entity",
        from = "Column::BreedId",
        to = "super::breed::Column::Id",
        on_delete = "Cascade"
    )]
    Breed,
}

impl Related<super::breed::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Breed.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Kitten {
    fn from(model: Model) -> Self {
        Kitten {
            id: model.id,
            name: model.name,
            breed_id: model.breed_id,
            age_month: model.age_month,
            description: model.description,
            color: model.color,
        }
    }
}
