//! A module containing the [`SeminarError`] enum, which contains the errors of the seminar
//! operations.

use crate::{CategoryId, SeminarId, UserId};

/// Represents any type of error that could happen when using this crate.
#[derive(thiserror::Error, Debug)]
#[rustfmt::skip]
pub enum SeminarError {
    // --------
    // --- Internal server errors
    // --------

    /// An error from the database.
    #[error(transparent)]
    DbError(#[from] sea_orm::DbErr),

    // --------
    // --- Logical errors
    // --------

    /// The seminar with the provided ID was not found.
    #[error("seminar with id `{0}` not found in database")]
    SeminarNotFound(
        /// The seminar ID.
        SeminarId,
    ),
    /// The category with the provided ID was not found.
    #[error("category with id `{0}` not found in database")]
    CategoryNotFound(
        /// The category ID.
        CategoryId,
    ),
    /// The user with the provided ID was not found.
    #[error("user with id `{0}` not found in database")]
    UserNotFound(
        /// The user ID.
        UserId,
    ),
    /// The user isn't the organizer of the seminar.
    #[error("user `{1}` is not the organizer of seminar `{0}`")]
    NotOrganizer(
        /// The seminar ID.
        SeminarId,
        /// The user ID.
        UserId,
    ),
    /// The user didn't join the seminar.
    #[error("user `{1}` is not a participant of seminar `{0}`")]
    NotParticipant(
        /// The seminar ID.
        SeminarId,
        /// The user ID.
        UserId,
    ),
}

/// Represents the result of a computation that could return a [`SeminarError`].
pub type SeminarResult<T = ()> = Result<T, SeminarError>;
