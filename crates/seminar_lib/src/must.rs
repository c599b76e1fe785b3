//! This module contains utility functions used to retrieve some objects from the database,
//! that must exist. This is why it is called `must`.
//!
//! When such an object doesn't exist, the returned value isn't `Option::None` but the
//! corresponding error (for example, [`SeminarError::SeminarNotFound`]).

use entity::{categories, seminars, users};
use sea_orm::{ConnectionTrait, EntityTrait as _};

use crate::{
    CategoryId, SeminarId, UserId, category,
    error::{SeminarError, SeminarResult},
    user,
};

/// Returns the seminar bound to the provided ID.
pub async fn have_seminar<C: ConnectionTrait>(
    conn: &C,
    id: SeminarId,
) -> SeminarResult<seminars::Model> {
    seminars::Entity::find_by_id(id.0)
        .one(conn)
        .await?
        .ok_or(SeminarError::SeminarNotFound(id))
}

/// Returns the seminar bound to the provided ID, if the provided user organizes it.
pub async fn have_organized_seminar<C: ConnectionTrait>(
    conn: &C,
    organizer: UserId,
    id: SeminarId,
) -> SeminarResult<seminars::Model> {
    let seminar = have_seminar(conn, id).await?;
    if seminar.organizer_id != organizer.0 {
        return Err(SeminarError::NotOrganizer(id, organizer));
    }
    Ok(seminar)
}

/// Returns the category bound to the provided ID.
pub async fn have_category<C: ConnectionTrait>(
    conn: &C,
    id: CategoryId,
) -> SeminarResult<categories::Model> {
    category::get(conn, id)
        .await?
        .ok_or(SeminarError::CategoryNotFound(id))
}

/// Returns the user bound to the provided ID.
pub async fn have_user<C: ConnectionTrait>(conn: &C, id: UserId) -> SeminarResult<users::Model> {
    user::get(conn, id)
        .await?
        .ok_or(SeminarError::UserNotFound(id))
}
