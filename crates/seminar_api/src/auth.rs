//! The identification of the current user.
//!
//! The ID of the current user is stored in the session cookie, under the [`USER_ID_SESS_KEY`]
//! key. Every `/Seminar` route requires it. In debug builds, the `/Account/Login` route can
//! be used to open a session with a username. In release builds, the session is expected to
//! be opened by an identity provider sharing the same session key.

use actix_session::Session;
use seminar_lib::UserId;

use crate::{ApiResult, SeminarErrorKind};

pub const USER_ID_SESS_KEY: &str = "__seminar_user_id";

/// Returns the ID of the user bound to the session.
pub fn current_user(session: &Session) -> ApiResult<UserId> {
    match session.get::<UserId>(USER_ID_SESS_KEY) {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(SeminarErrorKind::Unauthorized),
        Err(e) => {
            tracing::warn!("Invalid session content: {e}");
            Err(SeminarErrorKind::Unauthorized)
        }
    }
}

/// Binds the session to the provided user.
pub fn open_session(session: &Session, user: UserId) -> ApiResult<()> {
    session.renew();
    session
        .insert(USER_ID_SESS_KEY, user)
        .map_err(|e| SeminarErrorKind::Unknown(format!("session insert error: {e}")))
}
