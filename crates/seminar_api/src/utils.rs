use std::{
    future::{Ready, ready},
    ops::Deref,
};

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, dev::Payload, error::ErrorInternalServerError,
    http::header,
};
use seminar_lib::SeminarId;
use serde::Serialize;

use crate::{ApiResult, SeminarErrorKind};

/// Converts the provided body to a `200 OK` JSON responses.
pub fn json<T: Serialize, E>(obj: T) -> Result<HttpResponse, E> {
    Ok(HttpResponse::Ok().json(obj))
}

/// Returns a `303 See Other` response to the provided location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Parses a seminar ID from a path segment.
pub fn parse_id(raw: &str) -> ApiResult<SeminarId> {
    raw.parse()
        .map(SeminarId)
        .map_err(|_| SeminarErrorKind::InvalidId(raw.to_owned()))
}

/// A resource handler, like [`Data`][d].
///
/// The difference with [`Data`][d] is that it doesn't use an [`Arc`](std::sync::Arc)
/// internally, but the [`Clone`] implementation of the inner type to implement [`FromRequest`].
///
/// [d]: actix_web::web::Data
#[derive(Clone)]
pub struct Res<T>(pub T);

impl<T> From<T> for Res<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Res<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Clone + 'static> FromRequest for Res<T> {
    type Error = actix_web::Error;

    type Future = Ready<Result<Self, actix_web::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let res = req.app_data::<T>().cloned().map(Self).ok_or_else(|| {
            ErrorInternalServerError(format!(
                "{} should be present",
                std::any::type_name::<T>()
            ))
        });
        ready(res)
    }
}
