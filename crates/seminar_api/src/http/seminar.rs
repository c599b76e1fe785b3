//! The `/Seminar` routes. Every route requires an opened session.
//!
//! The forms are submitted as `application/x-www-form-urlencoded` bodies. A successful
//! submission redirects with a `303 See Other` response. A rejected one returns a
//! `400 Bad Request` response with the submitted values and the error messages, so the
//! form can be shown again.

use actix_session::Session;
use actix_web::{HttpResponse, Scope, web};
use seminar_lib::{
    Database, SeminarId, category,
    form::{FieldErrors, SeminarForm},
    must,
    participant::{self, JoinOutcome},
    seminar,
    view::SeminarFormView,
};
use serde::Deserialize;
use tracing_actix_web::RequestId;

use crate::{
    ApiResult, FitRequestId as _, Res, SeminarResponse, auth,
    utils::{json, parse_id, redirect},
};

const ALL_LOCATION: &str = "/Seminar/All";
const JOINED_LOCATION: &str = "/Seminar/Joined";

pub fn seminar_scope() -> Scope {
    web::scope("/Seminar")
        .route("/All", web::get().to(all))
        .route("/Joined", web::get().to(joined))
        .route("/Details/{id}", web::get().to(details))
        .route("/Add", web::get().to(add_form))
        .route("/Add", web::post().to(add))
        .route("/Edit/{id}", web::get().to(edit_form))
        .route("/Edit/{id}", web::post().to(edit))
        .route("/Delete/{id}", web::get().to(delete_confirmation))
        .route("/DeleteConfirmed/{id}", web::post().to(delete))
        .route("/Join/{id}", web::post().to(join))
        .route("/Leave/{id}", web::get().to(leave))
}

/// The form as submitted by the browser, before any parsing.
#[derive(Deserialize)]
struct SubmittedForm {
    #[serde(default)]
    topic: String,
    #[serde(default)]
    lecturer: String,
    #[serde(default)]
    details: String,
    #[serde(default)]
    date_and_time: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    category_id: String,
}

impl From<SubmittedForm> for SeminarForm {
    fn from(form: SubmittedForm) -> Self {
        Self {
            topic: form.topic,
            lecturer: form.lecturer,
            details: form.details,
            date_and_time: form.date_and_time,
            // a duration that isn't a number fails the range check
            duration: form.duration.trim().parse().unwrap_or_default(),
            category_id: form.category_id.trim().parse().ok(),
        }
    }
}

async fn rejected(
    db: &Database,
    id: Option<SeminarId>,
    form: SeminarForm,
    errors: FieldErrors,
) -> ApiResult<HttpResponse> {
    let categories = category::all(&db.sql_conn).await?;
    let view = SeminarFormView::with_errors(id.map(From::from), form, categories, errors);
    Ok(HttpResponse::BadRequest().json(view))
}

async fn all(
    req_id: RequestId,
    session: Session,
    Res(db): Res<Database>,
) -> SeminarResponse<HttpResponse> {
    auth::current_user(&session).fit(req_id)?;
    let seminars = seminar::all(&db.sql_conn).await.fit(req_id)?;
    json(seminars)
}

async fn joined(
    req_id: RequestId,
    session: Session,
    Res(db): Res<Database>,
) -> SeminarResponse<HttpResponse> {
    let user = auth::current_user(&session).fit(req_id)?;
    let seminars = seminar::joined_by(&db.sql_conn, user).await.fit(req_id)?;
    json(seminars)
}

async fn details(
    req_id: RequestId,
    session: Session,
    Res(db): Res<Database>,
    id: web::Path<String>,
) -> SeminarResponse<HttpResponse> {
    auth::current_user(&session).fit(req_id)?;
    let id = parse_id(&id).fit(req_id)?;
    let details = seminar::details(&db.sql_conn, id).await.fit(req_id)?;
    json(details)
}

async fn add_form(
    req_id: RequestId,
    session: Session,
    Res(db): Res<Database>,
) -> SeminarResponse<HttpResponse> {
    auth::current_user(&session).fit(req_id)?;
    let categories = category::all(&db.sql_conn).await.fit(req_id)?;
    json(SeminarFormView::new(None, SeminarForm::default(), categories))
}

async fn add(
    req_id: RequestId,
    session: Session,
    Res(db): Res<Database>,
    web::Form(submitted): web::Form<SubmittedForm>,
) -> SeminarResponse<HttpResponse> {
    let user = auth::current_user(&session).fit(req_id)?;
    let form = SeminarForm::from(submitted);

    match form.check(&db.sql_conn).await.fit(req_id)? {
        Ok(new_seminar) => {
            seminar::create(&db.sql_conn, user, new_seminar)
                .await
                .fit(req_id)?;
            Ok(redirect(ALL_LOCATION))
        }
        Err(errors) => rejected(&db, None, form, errors).await.fit(req_id),
    }
}

async fn edit_form(
    req_id: RequestId,
    session: Session,
    Res(db): Res<Database>,
    id: web::Path<String>,
) -> SeminarResponse<HttpResponse> {
    let user = auth::current_user(&session).fit(req_id)?;
    let id = parse_id(&id).fit(req_id)?;
    let form = seminar::edit_form(&db.sql_conn, user, id)
        .await
        .fit(req_id)?;
    let categories = category::all(&db.sql_conn).await.fit(req_id)?;
    json(SeminarFormView::new(Some(id.into()), form, categories))
}

async fn edit(
    req_id: RequestId,
    session: Session,
    Res(db): Res<Database>,
    id: web::Path<String>,
    web::Form(submitted): web::Form<SubmittedForm>,
) -> SeminarResponse<HttpResponse> {
    let user = auth::current_user(&session).fit(req_id)?;
    let id = parse_id(&id).fit(req_id)?;
    // Ownership first, then the form
    must::have_organized_seminar(&db.sql_conn, user, id)
        .await
        .fit(req_id)?;

    let form = SeminarForm::from(submitted);

    match form.check(&db.sql_conn).await.fit(req_id)? {
        Ok(edited) => {
            seminar::edit(&db.sql_conn, user, id, edited)
                .await
                .fit(req_id)?;
            Ok(redirect(ALL_LOCATION))
        }
        Err(errors) => rejected(&db, Some(id), form, errors).await.fit(req_id),
    }
}

async fn delete_confirmation(
    req_id: RequestId,
    session: Session,
    Res(db): Res<Database>,
    id: web::Path<String>,
) -> SeminarResponse<HttpResponse> {
    let user = auth::current_user(&session).fit(req_id)?;
    let id = parse_id(&id).fit(req_id)?;
    let seminar = seminar::delete_confirmation(&db.sql_conn, user, id)
        .await
        .fit(req_id)?;
    json(seminar)
}

async fn delete(
    req_id: RequestId,
    session: Session,
    Res(db): Res<Database>,
    id: web::Path<String>,
) -> SeminarResponse<HttpResponse> {
    let user = auth::current_user(&session).fit(req_id)?;
    let id = parse_id(&id).fit(req_id)?;
    seminar::delete(&db.sql_conn, user, id).await.fit(req_id)?;
    Ok(redirect(ALL_LOCATION))
}

async fn join(
    req_id: RequestId,
    session: Session,
    Res(db): Res<Database>,
    id: web::Path<String>,
) -> SeminarResponse<HttpResponse> {
    let user = auth::current_user(&session).fit(req_id)?;
    let id = parse_id(&id).fit(req_id)?;

    let location = match participant::join(&db.sql_conn, user, id).await.fit(req_id)? {
        JoinOutcome::Joined => JOINED_LOCATION,
        JoinOutcome::AlreadyJoined => ALL_LOCATION,
    };

    Ok(redirect(location))
}

async fn leave(
    req_id: RequestId,
    session: Session,
    Res(db): Res<Database>,
    id: web::Path<String>,
) -> SeminarResponse<HttpResponse> {
    let user = auth::current_user(&session).fit(req_id)?;
    let id = parse_id(&id).fit(req_id)?;
    participant::leave(&db.sql_conn, user, id)
        .await
        .fit(req_id)?;
    Ok(redirect(JOINED_LOCATION))
}
