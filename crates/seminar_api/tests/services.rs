
use seminar_lib::{
    CategoryId, SeminarId, UserId, error::SeminarError, form::SeminarForm, seminar, user,
};

#[tokio::test]
async fn listing_is_ordered_by_id() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let (_, first) = base::insert_seminar(&db, "alice", "First").await?;
        let (_, second) = base::insert_seminar(&db, "bob", "Second").await?;

        let all = seminar::all(&db.sql_conn).await?;
        let ids = all.iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(ids, [first.0, second.0]);
        assert_eq!(all[0].organizer, "alice");
        assert_eq!(all[1].organizer, "bob");
        assert_eq!(all[1].lecturer, "Jane Doe");

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn create_checks_references() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let alice = UserId(user::get_or_insert(&db.sql_conn, "alice").await?.id);

        let mut new = base::new_seminar(&db, "Orphan", "01/01/2026 09:00").await?;
        new.category = CategoryId(999);
        let err = seminar::create(&db.sql_conn, alice, new).await.unwrap_err();
        assert!(matches!(err, SeminarError::CategoryNotFound(CategoryId(999))));

        let new = base::new_seminar(&db, "Orphan", "01/01/2026 09:00").await?;
        let err = seminar::create(&db.sql_conn, UserId(999), new)
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::UserNotFound(UserId(999))));

        assert!(seminar::all(&db.sql_conn).await?.is_empty());

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn details_of_unknown_seminar() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let err = seminar::details(&db.sql_conn, SeminarId(7))
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::SeminarNotFound(SeminarId(7))));

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn edit_is_reserved_to_organizer() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let (alice, id) = base::insert_seminar(&db, "alice", "Original").await?;
        let bob = UserId(user::get_or_insert(&db.sql_conn, "bob").await?.id);

        let err = seminar::edit_form(&db.sql_conn, bob, id).await.unwrap_err();
        assert!(matches!(err, SeminarError::NotOrganizer(s, u) if s == id && u == bob));

        let edited = base::new_seminar(&db, "Edited", "05/05/2026 10:30").await?;
        let err = seminar::edit(&db.sql_conn, bob, id, edited.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::NotOrganizer(_, _)));

        let err = seminar::delete_confirmation(&db.sql_conn, bob, id)
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::NotOrganizer(_, _)));

        let err = seminar::delete(&db.sql_conn, bob, id).await.unwrap_err();
        assert!(matches!(err, SeminarError::NotOrganizer(_, _)));

        seminar::edit(&db.sql_conn, alice, id, edited).await?;
        let form = seminar::edit_form(&db.sql_conn, alice, id).await?;
        assert_eq!(form.topic, "Edited");
        assert_eq!(form.date_and_time, "05/05/2026 10:30");

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn form_check_reports_unknown_category() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let form = SeminarForm {
            topic: "Category check".to_owned(),
            lecturer: "Jane Doe".to_owned(),
            details: "Checking the category reference.".to_owned(),
            date_and_time: "01/01/2026 09:00".to_owned(),
            duration: 30,
            category_id: Some(999),
        };
        let errors = form.check(&db.sql_conn).await?.unwrap_err();
        assert_eq!(errors.get("category_id"), ["Category does not exist".to_owned()]);

        let category = base::first_category(&db).await?;
        let form = SeminarForm {
            category_id: Some(category.0),
            ..form
        };
        let new = form.check(&db.sql_conn).await?.unwrap();
        assert_eq!(new.category, category);

        anyhow::Ok(())
    })
    .await
}
