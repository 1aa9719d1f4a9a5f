use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body of the public API: a single `error` string, never structured
/// detail. Whatever went wrong internally is logged, not returned.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
