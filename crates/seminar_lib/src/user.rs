//! This module contains anything related to the user identities in this library.

use entity::users;
use sea_orm::{
    ActiveValue::Set, ColumnTrait as _, ConnectionTrait, EntityTrait as _, QueryFilter as _,
};

use crate::{UserId, error::SeminarResult};

/// Returns the optional user bound to the provided ID.
pub async fn get<C: ConnectionTrait>(conn: &C, id: UserId) -> SeminarResult<Option<users::Model>> {
    let user = users::Entity::find_by_id(id.0).one(conn).await?;
    Ok(user)
}

/// Returns the optional user bound to the provided username.
pub async fn get_by_username<C: ConnectionTrait>(
    conn: &C,
    username: &str,
) -> SeminarResult<Option<users::Model>> {
    let user = users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(conn)
        .await?;
    Ok(user)
}

/// Returns the user with the provided username, and inserts it if it doesn't exist yet.
pub async fn get_or_insert<C: ConnectionTrait>(
    conn: &C,
    username: &str,
) -> SeminarResult<users::Model> {
    if let Some(user) = get_by_username(conn, username).await? {
        return Ok(user);
    }

    let new_user = users::ActiveModel {
        username: Set(username.to_owned()),
        ..Default::default()
    };

    let id = users::Entity::insert(new_user).exec(conn).await?.last_insert_id;
    tracing::info!("Inserted user `{username}` with id {id}");

    Ok(users::Model {
        id,
        username: username.to_owned(),
    })
}
