//! Breed database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Breed;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "breed")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::kitten::Entity")]
    Kitten,
}

impl Related<super::kitten::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kitten.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Breed {
    fn from(model: Model) -> Self {
        Breed {
            id: model.id,
            name: model.name,
        }
    }
}
