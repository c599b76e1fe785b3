//! Module used to serve the routes of the API. Each submodule is specific for a route segment.

use actix_web::{Scope, web};

use self::account::account_scope;
use self::seminar::seminar_scope;

pub mod account;
pub mod seminar;

pub fn api_route() -> Scope {
    web::scope("")
        .service(seminar_scope())
        .service(account_scope())
}
