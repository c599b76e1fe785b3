//! Sign-in without any password, only available in debug builds.

use actix_session::Session;
use actix_web::{HttpResponse, web};
use seminar_lib::{Database, UserId, bounds::USERNAME_MAX_LEN, user};
use serde::{Deserialize, Serialize};
use tracing_actix_web::RequestId;

use crate::{FitRequestId as _, Res, SeminarErrorKind, SeminarResponse, auth, utils::json};

#[derive(Deserialize)]
pub struct LoginBody {
    username: String,
}

#[derive(Serialize)]
struct LoginResponse {
    id: i32,
    username: String,
}

/// Opens a session for the provided username. The user is created if it doesn't exist yet.
pub async fn login(
    req_id: RequestId,
    session: Session,
    Res(db): Res<Database>,
    web::Json(body): web::Json<LoginBody>,
) -> SeminarResponse<HttpResponse> {
    let username = body.username.trim();
    if username.is_empty() || username.chars().count() > USERNAME_MAX_LEN as usize {
        return Err(SeminarErrorKind::InvalidUsername).fit(req_id);
    }

    let user = user::get_or_insert(&db.sql_conn, username)
        .await
        .fit(req_id)?;
    auth::open_session(&session, UserId(user.id)).fit(req_id)?;

    tracing::info!("User `{}` signed in", user.username);

    json(LoginResponse {
        id: user.id,
        username: user.username,
    })
}
