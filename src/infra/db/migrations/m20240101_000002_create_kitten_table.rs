//! Migration: Create the kitten table with a cascading reference to breed.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_breed_table::Breed;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Kitten::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Kitten::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Kitten::Name).string().not_null())
                    .col(ColumnDef::new(Kitten::BreedId).integer().not_null())
                    .col(ColumnDef::new(Kitten::AgeMonth).integer().not_null())
                    .col(ColumnDef::new(Kitten::Description).string().not_null())
                    .col(ColumnDef::new(Kitten::Color).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kitten_breed_id")
                            .from(Kitten::Table, Kitten::BreedId)
                            .to(Breed::Table, Breed::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // By-breed lookups filter on this column
        manager
            .create_index(
                Index::create()
                    .name("idx_kitten_breed_id")
                    .table(Kitten::Table)
                    .col(Kitten::BreedId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Kitten::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Kitten {
    Table,
    Id,
    Name,
    BreedId,
    AgeMonth,
    Description,
    Color,
}
