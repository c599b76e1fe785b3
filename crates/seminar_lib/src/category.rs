//! Lookup of the seminar categories.
//!
//! Categories are reference data: they are only read, to fill the category selector of the
//! forms and to check the category of a seminar before saving it.

use entity::categories;
use sea_orm::{ConnectionTrait, EntityTrait as _, PaginatorTrait as _, QueryOrder as _};

use crate::{CategoryId, error::SeminarResult, view::CategoryInfo};

/// Returns all the categories, ordered by ID.
pub async fn all<C: ConnectionTrait>(conn: &C) -> SeminarResult<Vec<CategoryInfo>> {
    let categories = categories::Entity::find()
        .order_by_asc(categories::Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(From::from)
        .collect();
    Ok(categories)
}

/// Returns the optional category bound to the provided ID.
pub async fn get<C: ConnectionTrait>(
    conn: &C,
    id: CategoryId,
) -> SeminarResult<Option<categories::Model>> {
    let category = categories::Entity::find_by_id(id.0).one(conn).await?;
    Ok(category)
}

/// Returns true if the category with the provided ID exists.
pub async fn exists<C: ConnectionTrait>(conn: &C, id: CategoryId) -> SeminarResult<bool> {
    let count = categories::Entity::find_by_id(id.0).count(conn).await?;
    Ok(count > 0)
}
