//! The operations on seminars: listing, details, creation, edition and deletion.
//!
//! The current user is always provided by the caller. The edition and the deletion of a
//! seminar are reserved to its organizer, on both the read and the write paths.

use entity::{categories, seminar_participants, seminars, users};
use sea_orm::{
    ActiveModelTrait as _, ActiveValue::Set, ColumnTrait as _, ConnectionTrait, EntityTrait as _,
    IntoActiveModel as _, JoinType, QueryFilter as _, QueryOrder as _, QuerySelect as _,
    RelationTrait as _, Select, TransactionTrait,
};

use crate::{
    SeminarId, UserId,
    error::{SeminarError, SeminarResult},
    form::{NewSeminar, SeminarForm},
    must,
    view::{SeminarDelete, SeminarDetails, SeminarDetailsRow, SeminarInfo, SeminarInfoRow},
};

/// Selects the columns of [`SeminarInfoRow`], joined with the organizer and the category.
fn select_info() -> Select<seminars::Entity> {
    seminars::Entity::find()
        .select_only()
        .columns([
            seminars::Column::Id,
            seminars::Column::Topic,
            seminars::Column::Lecturer,
            seminars::Column::DateAndTime,
        ])
        .column_as(users::Column::Username, "organizer")
        .column_as(categories::Column::Name, "category")
        .join(JoinType::InnerJoin, seminars::Relation::Organizer.def())
        .join(JoinType::InnerJoin, seminars::Relation::Category.def())
        .order_by_asc(seminars::Column::Id)
}

/// Returns all the seminars, ordered by ID.
pub async fn all<C: ConnectionTrait>(conn: &C) -> SeminarResult<Vec<SeminarInfo>> {
    let seminars = select_info()
        .into_model::<SeminarInfoRow>()
        .all(conn)
        .await?
        .into_iter()
        .map(From::from)
        .collect();
    Ok(seminars)
}

/// Returns the seminars joined by the provided user, ordered by ID.
pub async fn joined_by<C: ConnectionTrait>(
    conn: &C,
    user: UserId,
) -> SeminarResult<Vec<SeminarInfo>> {
    let seminars = select_info()
        .join(
            JoinType::InnerJoin,
            seminars::Relation::SeminarParticipants.def(),
        )
        .filter(seminar_participants::Column::ParticipantId.eq(user.0))
        .into_model::<SeminarInfoRow>()
        .all(conn)
        .await?
        .into_iter()
        .map(From::from)
        .collect();
    Ok(seminars)
}

/// Returns all the information of a seminar.
pub async fn details<C: ConnectionTrait>(conn: &C, id: SeminarId) -> SeminarResult<SeminarDetails> {
    let details = select_info()
        .columns([seminars::Column::Duration, seminars::Column::Details])
        .filter(seminars::Column::Id.eq(id.0))
        .into_model::<SeminarDetailsRow>()
        .one(conn)
        .await?
        .ok_or(SeminarError::SeminarNotFound(id))?;
    Ok(details.into())
}

/// Saves a new seminar organized by the provided user, and returns its ID.
pub async fn create<C: ConnectionTrait>(
    conn: &C,
    organizer: UserId,
    seminar: NewSeminar,
) -> SeminarResult<SeminarId> {
    must::have_user(conn, organizer).await?;
    must::have_category(conn, seminar.category).await?;

    let new_seminar = seminars::ActiveModel {
        topic: Set(seminar.topic),
        lecturer: Set(seminar.lecturer),
        details: Set(seminar.details),
        date_and_time: Set(seminar.date_and_time),
        duration: Set(seminar.duration),
        category_id: Set(seminar.category.0),
        organizer_id: Set(organizer.0),
        ..Default::default()
    };

    let id = seminars::Entity::insert(new_seminar)
        .exec(conn)
        .await?
        .last_insert_id;
    tracing::info!("User {organizer} created seminar {id}");

    Ok(SeminarId(id))
}

/// Returns the form to edit a seminar, filled with its current values.
///
/// Only the organizer of the seminar can edit it.
pub async fn edit_form<C: ConnectionTrait>(
    conn: &C,
    caller: UserId,
    id: SeminarId,
) -> SeminarResult<SeminarForm> {
    let seminar = must::have_organized_seminar(conn, caller, id).await?;
    Ok(SeminarForm::from(&seminar))
}

/// Overwrites the values of a seminar.
///
/// Only the organizer of the seminar can edit it.
pub async fn edit<C: ConnectionTrait>(
    conn: &C,
    caller: UserId,
    id: SeminarId,
    seminar: NewSeminar,
) -> SeminarResult<()> {
    let current = must::have_organized_seminar(conn, caller, id).await?;
    must::have_category(conn, seminar.category).await?;

    let mut edited = current.into_active_model();
    edited.topic = Set(seminar.topic);
    edited.lecturer = Set(seminar.lecturer);
    edited.details = Set(seminar.details);
    edited.date_and_time = Set(seminar.date_and_time);
    edited.duration = Set(seminar.duration);
    edited.category_id = Set(seminar.category.0);
    edited.organizer_id = Set(caller.0);
    edited.update(conn).await?;

    tracing::info!("User {caller} edited seminar {id}");

    Ok(())
}

/// Returns the seminar information shown before confirming its deletion.
///
/// Only the organizer of the seminar can delete it.
pub async fn delete_confirmation<C: ConnectionTrait>(
    conn: &C,
    caller: UserId,
    id: SeminarId,
) -> SeminarResult<SeminarDelete> {
    let seminar = must::have_organized_seminar(conn, caller, id).await?;
    Ok(SeminarDelete::from(&seminar))
}

/// Deletes a seminar and all its participations.
///
/// Only the organizer of the seminar can delete it.
pub async fn delete<C: TransactionTrait>(
    conn: &C,
    caller: UserId,
    id: SeminarId,
) -> SeminarResult<()> {
    let txn = conn.begin().await?;

    must::have_organized_seminar(&txn, caller, id).await?;

    let participations = seminar_participants::Entity::delete_many()
        .filter(seminar_participants::Column::SeminarId.eq(id.0))
        .exec(&txn)
        .await?
        .rows_affected;
    seminars::Entity::delete_by_id(id.0).exec(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        "User {caller} deleted seminar {id}, with {participations} participation(s)"
    );

    Ok(())
}
