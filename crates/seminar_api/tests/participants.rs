
use actix_web::test;
use entity::seminar_participants;
use sea_orm::{ColumnTrait as _, EntityTrait as _, PaginatorTrait as _, QueryFilter as _};
use seminar_lib::{
    SeminarId, UserId,
    error::SeminarError,
    participant::{self, JoinOutcome},
    seminar, user,
};

async fn rows_of(db: &seminar_lib::Database, id: SeminarId) -> anyhow::Result<u64> {
    let count = seminar_participants::Entity::find()
        .filter(seminar_participants::Column::SeminarId.eq(id.0))
        .count(&db.sql_conn)
        .await?;
    Ok(count)
}

#[tokio::test]
async fn joining_twice_keeps_one_row() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let (_, id) = base::insert_seminar(&db, "alice", "Popular").await?;
        let bob = UserId(user::get_or_insert(&db.sql_conn, "bob").await?.id);

        let first = participant::join(&db.sql_conn, bob, id).await?;
        let second = participant::join(&db.sql_conn, bob, id).await?;
        assert_eq!(first, JoinOutcome::Joined);
        assert_eq!(second, JoinOutcome::AlreadyJoined);
        assert_eq!(rows_of(&db, id).await?, 1);
        assert!(participant::is_participant(&db.sql_conn, id, bob).await?);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn duplicate_membership_is_rejected_by_storage() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let (_, id) = base::insert_seminar(&db, "alice", "Popular").await?;
        let bob = UserId(user::get_or_insert(&db.sql_conn, "bob").await?.id);
        participant::join(&db.sql_conn, bob, id).await?;

        let res = seminar_participants::Entity::insert(seminar_participants::ActiveModel {
            seminar_id: sea_orm::ActiveValue::Set(id.0),
            participant_id: sea_orm::ActiveValue::Set(bob.0),
        })
        .exec_without_returning(&db.sql_conn)
        .await;
        assert!(res.is_err());
        assert_eq!(rows_of(&db, id).await?, 1);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn leaving_removes_only_caller() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let (alice, id) = base::insert_seminar(&db, "alice", "Popular").await?;
        let bob = UserId(user::get_or_insert(&db.sql_conn, "bob").await?.id);
        participant::join(&db.sql_conn, alice, id).await?;
        participant::join(&db.sql_conn, bob, id).await?;
        assert_eq!(participant::count(&db.sql_conn, id).await?, 2);

        participant::leave(&db.sql_conn, bob, id).await?;
        assert_eq!(participant::count(&db.sql_conn, id).await?, 1);
        assert!(participant::is_participant(&db.sql_conn, id, alice).await?);
        assert!(!participant::is_participant(&db.sql_conn, id, bob).await?);

        let err = participant::leave(&db.sql_conn, bob, id).await.unwrap_err();
        assert!(matches!(err, SeminarError::NotParticipant(s, u) if s == id && u == bob));

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn leaving_without_membership_is_bad_request() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let (_, id) = base::insert_seminar(&db, "alice", "Lonely").await?;
        let app = base::get_app(db.clone()).await;
        let cookie = base::login(&app, "bob").await?;

        let req = test::TestRequest::get()
            .uri(&format!("/Seminar/Leave/{id}"))
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body = test::read_body(resp).await;
        let err = base::error_from_slice(&body)?;
        assert_eq!(err.r#type, 305);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn deleting_removes_memberships() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let (alice, id) = base::insert_seminar(&db, "alice", "Doomed").await?;
        let (_, other) = base::insert_seminar(&db, "alice", "Survivor").await?;

        for name in ["bob", "carol", "dave"] {
            let user = UserId(user::get_or_insert(&db.sql_conn, name).await?.id);
            participant::join(&db.sql_conn, user, id).await?;
            participant::join(&db.sql_conn, user, other).await?;
        }
        assert_eq!(rows_of(&db, id).await?, 3);

        seminar::delete(&db.sql_conn, alice, id).await?;

        assert_eq!(rows_of(&db, id).await?, 0);
        assert_eq!(rows_of(&db, other).await?, 3);
        assert!(matches!(
            participant::count(&db.sql_conn, id).await,
            Err(SeminarError::SeminarNotFound(_))
        ));

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn joined_listing_is_per_user() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let (_, first) = base::insert_seminar(&db, "alice", "First").await?;
        let (_, second) = base::insert_seminar(&db, "alice", "Second").await?;
        let (_, third) = base::insert_seminar(&db, "carol", "Third").await?;
        let bob = UserId(user::get_or_insert(&db.sql_conn, "bob").await?.id);
        let dave = UserId(user::get_or_insert(&db.sql_conn, "dave").await?.id);

        participant::join(&db.sql_conn, bob, third).await?;
        participant::join(&db.sql_conn, bob, first).await?;
        participant::join(&db.sql_conn, dave, second).await?;

        let joined = seminar::joined_by(&db.sql_conn, bob).await?;
        let ids = joined.iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(ids, [first.0, third.0]);
        assert_eq!(joined[1].organizer, "carol");

        let joined = seminar::joined_by(&db.sql_conn, dave).await?;
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].topic, "Second");

        anyhow::Ok(())
    })
    .await
}
