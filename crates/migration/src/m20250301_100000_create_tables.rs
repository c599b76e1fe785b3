use entity::{categories, seminar_participants, seminars, users};
use sea_orm::EntityTrait;
use sea_orm_migration::{prelude::*, sea_orm::Schema};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_database_backend();
        let schema = Schema::new(db);

        create_entity_table(manager, &schema, users::Entity).await?;
        create_entity_table(manager, &schema, categories::Entity).await?;
        create_entity_table(manager, &schema, seminars::Entity).await?;
        create_entity_table(manager, &schema, seminar_participants::Entity).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_database_backend();
        let schema = Schema::new(db);

        drop_entity_table(manager, &schema, seminar_participants::Entity).await?;
        drop_entity_table(manager, &schema, seminars::Entity).await?;
        drop_entity_table(manager, &schema, categories::Entity).await?;
        drop_entity_table(manager, &schema, users::Entity).await?;

        Ok(())
    }
}

async fn create_entity_table<'a, E: EntityTrait>(
    manager: &'a SchemaManager<'a>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    manager
        .create_table(schema.create_table_from_entity(entity))
        .await
}

async fn drop_entity_table<'a, E: EntityTrait>(
    manager: &'a SchemaManager<'a>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    let table_name = schema
        .create_table_from_entity(entity)
        .get_table_name()
        .cloned()
        .ok_or_else(|| DbErr::Migration("entity table has no name".to_owned()))?;

    manager
        .drop_table(Table::drop().table(table_name).take())
        .await
}
