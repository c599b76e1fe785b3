use std::fmt;

use actix_web::{HttpResponse, http::StatusCode};
use seminar_lib::error::SeminarError;
use tracing_actix_web::RequestId;

#[derive(thiserror::Error, Debug)]
#[repr(i32)] // i32 to be used with clients that don't support unsigned integers
#[rustfmt::skip]
pub enum SeminarErrorKind {
    // Caution: when creating a new error, you must ensure its code isn't
    // in conflict with another one mapped from `seminar_lib::error::SeminarError`.

    // --------
    // --- Internal server errors
    // --------

    // ...Error from seminar_lib

    #[error("unknown error: {0}")]
    Unknown(String) = 105,

    // --------
    // --- Authentication errors
    // --------

    #[error("unauthorized")]
    Unauthorized = 201,

    // ...Errors from seminar_lib

    // --------
    // --- Logical errors
    // --------

    #[error("not found")]
    EndpointNotFound = 301,
    #[error("id should be an integer, got `{0}`")]
    InvalidId(String) = 302,

    // ...Errors from seminar_lib

    #[error("invalid username")]
    InvalidUsername = 307,

    #[error(transparent)]
    Lib(#[from] SeminarError),
}

#[derive(serde::Serialize)]
pub struct SeminarErrorKindResponse {
    pub r#type: i32,
    pub message: String,
}

impl actix_web::ResponseError for SeminarErrorKind {
    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let (r#type, status_code) = self.get_err_type_and_status_code();
        HttpResponse::build(status_code).json(SeminarErrorKindResponse {
            r#type,
            message: self.to_string(),
        })
    }
}

impl SeminarErrorKind {
    pub fn get_err_type_and_status_code(&self) -> (i32, StatusCode) {
        use SeminarErrorKind as E;
        use StatusCode as S;
        use seminar_lib::error::SeminarError as LE;

        match self {
            E::Unknown(_) => (105, S::INTERNAL_SERVER_ERROR),
            E::Lib(LE::DbError(_)) => (110, S::INTERNAL_SERVER_ERROR),

            E::Unauthorized => (201, S::UNAUTHORIZED),
            E::Lib(LE::NotOrganizer(_, _)) => (202, S::UNAUTHORIZED),
            E::Lib(LE::UserNotFound(_)) => (203, S::UNAUTHORIZED),

            E::EndpointNotFound => (301, S::NOT_FOUND),
            E::InvalidId(_) => (302, S::BAD_REQUEST),
            E::Lib(LE::SeminarNotFound(_)) => (303, S::BAD_REQUEST),
            E::Lib(LE::CategoryNotFound(_)) => (304, S::BAD_REQUEST),
            E::Lib(LE::NotParticipant(_, _)) => (305, S::BAD_REQUEST),
            E::InvalidUsername => (307, S::BAD_REQUEST),
        }
    }
}

impl From<sea_orm::DbErr> for SeminarErrorKind {
    fn from(value: sea_orm::DbErr) -> Self {
        Self::Lib(value.into())
    }
}

/// An API error bound to the ID of the request that produced it.
#[derive(Debug)]
pub struct TracedError {
    pub status_code: Option<StatusCode>,
    pub r#type: Option<i32>,
    pub request_id: RequestId,
    pub error: actix_web::Error,
}

impl fmt::Display for TracedError {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for TracedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl TracedError {
    fn to_err_res(&self, r#type: i32) -> ErrorResponse {
        ErrorResponse {
            request_id: self.request_id.to_string(),
            r#type,
            message: self.error.to_string(),
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub request_id: String,
    pub r#type: i32,
    pub message: String,
}

impl actix_web::ResponseError for TracedError {
    fn error_response(&self) -> HttpResponse {
        let r#type = self.r#type.unwrap_or(105);
        let status_code = self
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            tracing::error!(request_id = %self.request_id, "{}", self.error);
        }

        HttpResponse::build(status_code).json(self.to_err_res(r#type))
    }
}

/// Binds the error of a result to the ID of the current request.
pub trait FitRequestId<T> {
    fn fit(self, request_id: RequestId) -> SeminarResponse<T>;
}

impl<T, E> FitRequestId<T> for Result<T, E>
where
    E: Into<SeminarErrorKind>,
{
    fn fit(self, request_id: RequestId) -> SeminarResponse<T> {
        self.map_err(|e| {
            let error = e.into();
            let (r#type, status_code) = error.get_err_type_and_status_code();
            TracedError {
                status_code: Some(status_code),
                r#type: Some(r#type),
                request_id,
                error: error.into(),
            }
        })
    }
}

pub type ApiResult<T> = Result<T, SeminarErrorKind>;

/// The type returned by the route handlers.
pub type SeminarResponse<T> = Result<T, TracedError>;

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode as S;
    use seminar_lib::{CategoryId, SeminarId, UserId};

    use super::*;

    #[test]
    fn lib_errors_status_codes() {
        let cases = [
            (
                SeminarError::SeminarNotFound(SeminarId(1)),
                S::BAD_REQUEST,
            ),
            (
                SeminarError::CategoryNotFound(CategoryId(1)),
                S::BAD_REQUEST,
            ),
            (
                SeminarError::NotOrganizer(SeminarId(1), UserId(2)),
                S::UNAUTHORIZED,
            ),
            (
                SeminarError::NotParticipant(SeminarId(1), UserId(2)),
                S::BAD_REQUEST,
            ),
            (
                SeminarError::DbError(sea_orm::DbErr::Custom("oops".to_owned())),
                S::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let (_, status_code) = SeminarErrorKind::from(error).get_err_type_and_status_code();
            assert_eq!(status_code, expected);
        }
    }

    #[test]
    fn api_errors_status_codes() {
        assert_eq!(
            SeminarErrorKind::Unauthorized.get_err_type_and_status_code(),
            (201, S::UNAUTHORIZED)
        );
        assert_eq!(
            SeminarErrorKind::EndpointNotFound.get_err_type_and_status_code(),
            (301, S::NOT_FOUND)
        );
        assert_eq!(
            SeminarErrorKind::InvalidId("abc".to_owned()).get_err_type_and_status_code(),
            (302, S::BAD_REQUEST)
        );
    }
}
