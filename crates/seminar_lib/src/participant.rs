//! The participations of the users to the seminars.

use entity::seminar_participants;
use sea_orm::{
    ActiveValue::Set, ColumnTrait as _, ConnectionTrait, EntityTrait as _, PaginatorTrait as _,
    QueryFilter as _,
};

use crate::{
    SeminarId, UserId,
    error::{SeminarError, SeminarResult},
    must,
};

/// The result of a [`join`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The user is now a participant of the seminar.
    Joined,
    /// The user was already a participant of the seminar, nothing changed.
    AlreadyJoined,
}

/// Returns true if the provided user joined the provided seminar.
pub async fn is_participant<C: ConnectionTrait>(
    conn: &C,
    seminar: SeminarId,
    user: UserId,
) -> SeminarResult<bool> {
    let count = seminar_participants::Entity::find_by_id((seminar.0, user.0))
        .count(conn)
        .await?;
    Ok(count > 0)
}

/// Returns the amount of participants of a seminar.
pub async fn count<C: ConnectionTrait>(conn: &C, seminar: SeminarId) -> SeminarResult<u64> {
    must::have_seminar(conn, seminar).await?;

    let count = seminar_participants::Entity::find()
        .filter(seminar_participants::Column::SeminarId.eq(seminar.0))
        .count(conn)
        .await?;
    Ok(count)
}

/// Makes the provided user join a seminar.
///
/// Joining a seminar twice doesn't change anything, and returns [`JoinOutcome::AlreadyJoined`].
pub async fn join<C: ConnectionTrait>(
    conn: &C,
    user: UserId,
    seminar: SeminarId,
) -> SeminarResult<JoinOutcome> {
    must::have_seminar(conn, seminar).await?;
    must::have_user(conn, user).await?;

    if is_participant(conn, seminar, user).await? {
        return Ok(JoinOutcome::AlreadyJoined);
    }

    let participation = seminar_participants::ActiveModel {
        seminar_id: Set(seminar.0),
        participant_id: Set(user.0),
    };
    seminar_participants::Entity::insert(participation)
        .exec_without_returning(conn)
        .await?;

    tracing::info!("User {user} joined seminar {seminar}");

    Ok(JoinOutcome::Joined)
}

/// Makes the provided user leave a seminar.
///
/// Fails with [`SeminarError::NotParticipant`] if the user didn't join the seminar.
pub async fn leave<C: ConnectionTrait>(
    conn: &C,
    user: UserId,
    seminar: SeminarId,
) -> SeminarResult<()> {
    must::have_seminar(conn, seminar).await?;

    let removed = seminar_participants::Entity::delete_by_id((seminar.0, user.0))
        .exec(conn)
        .await?
        .rows_affected;

    if removed == 0 {
        return Err(SeminarError::NotParticipant(seminar, user));
    }

    tracing::info!("User {user} left seminar {seminar}");

    Ok(())
}
