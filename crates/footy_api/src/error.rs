use std::fmt;

use actix_web::{HttpResponse, http::StatusCode};
use footy_lib::error::FootyError;
use tracing_actix_web::RequestId;

#[derive(thiserror::Error, Debug)]
#[repr(i32)] // i32 to be used with clients that don't support unsigned integers
#[rustfmt::skip]
pub enum FootyErrorKind {
    // Caution: when creating a new error, you must ensure its code isn't
    // in conflict with another one in `footy_lib::FootyError`.

    #[error("not found")]
    EndpointNotFound = 301,

    // ...Errors from footy_lib

    #[error(transparent)]
    Lib(#[from] FootyError),
}

impl FootyErrorKind {
    pub fn get_err_type_and_status_code(&self) -> (i32, StatusCode) {
        use FootyError as LE;
        use FootyErrorKind as E;
        use StatusCode as S;

        match self {
            E::Lib(LE::MySql(_)) => (102, S::INTERNAL_SERVER_ERROR),

            E::EndpointNotFound => (301, S::NOT_FOUND),
            E::Lib(LE::PlayerNotFound(_)) => (302, S::NOT_FOUND),
            E::Lib(LE::InvalidField(_, _)) => (303, S::BAD_REQUEST),
            E::Lib(LE::AlreadyExists(_)) => (304, S::CONFLICT),
            E::Lib(LE::UnknownTable(_)) => (305, S::BAD_REQUEST),
        }
    }
}

#[derive(Debug)]
pub struct TracedError {
    pub status_code: StatusCode,
    pub r#type: i32,
    pub request_id: RequestId,
    pub error: FootyErrorKind,
}

impl fmt::Display for TracedError {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
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
        HttpResponse::build(self.status_code).json(ErrorResponse {
            request_id: self.request_id.to_string(),
            r#type: self.r#type,
            message: self.error.to_string(),
        })
    }
}

/// The response type of a route handler: either the responder, or an error traced with
/// the ID of the request that provoked it.
pub type FootyResponse<T> = Result<T, TracedError>;

/// Attaches the ID of the current request to the error of a `Result`, so the client
/// can quote it when reporting a problem.
pub trait FitRequestId<T, E> {
    fn fit(self, request_id: RequestId) -> FootyResponse<T>;
}

impl<T, E> FitRequestId<T, E> for Result<T, E>
where
    FootyErrorKind: From<E>,
{
    fn fit(self, request_id: RequestId) -> FootyResponse<T> {
        self.map_err(|e| {
            let error = FootyErrorKind::from(e);
            let (r#type, status_code) = error.get_err_type_and_status_code();
            if status_code.is_server_error() {
                tracing::error!(%request_id, "{error}");
            }
            TracedError {
                status_code,
                r#type,
                request_id,
                error,
            }
        })
    }
}
