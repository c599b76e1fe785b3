use entity::categories;
use sea_orm::{ActiveValue::Set, ColumnTrait as _, EntityTrait, QueryFilter as _};
use sea_orm_migration::prelude::*;

/// The categories available when creating a seminar.
pub(crate) const CATEGORIES: [&str; 4] = [
    "Technology & Innovation",
    "Business & Entrepreneurship",
    "Science & Research",
    "Arts & Culture",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        categories::Entity::insert_many(CATEGORIES.map(|name| categories::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }))
        .exec(manager.get_connection())
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        categories::Entity::delete_many()
            .filter(categories::Column::Name.is_in(CATEGORIES))
            .exec(manager.get_connection())
            .await?;

        Ok(())
    }
}
