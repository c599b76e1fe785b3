//! The `/Account` routes, used to open and close a session.

use actix_session::Session;
use actix_web::{HttpResponse, Scope, web};

use crate::utils::redirect;

#[cfg(debug_assertions)]
mod login;

pub fn account_scope() -> Scope {
    let scope = web::scope("/Account").route("/Logout", web::post().to(logout));

    #[cfg(debug_assertions)]
    let scope = scope.route("/Login", web::post().to(login::login));

    scope
}

async fn logout(session: Session) -> HttpResponse {
    session.purge();
    redirect("/")
}
