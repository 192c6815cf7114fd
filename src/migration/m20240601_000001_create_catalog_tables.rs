use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

use crate::entity::{Brands, Categories, ProductCategories, Products, Sections};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Tables are built from the entity definitions so the same migration
        // runs on Postgres and SQLite. Referenced tables go first.
        create_table(manager, Brands).await?;
        create_table(manager, Sections).await?;
        create_table(manager, Categories).await?;
        create_table(manager, Products).await?;
        create_table(manager, ProductCategories).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductCategories).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sections).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Brands).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

async fn create_table<E>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let schema = Schema::new(manager.get_database_backend());
    let mut statement = schema.create_table_from_entity(entity);
    manager
        .create_table(statement.if_not_exists().to_owned())
        .await
}
