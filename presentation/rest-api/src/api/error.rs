use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every failing endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error category, e.g. "ValidationError" or "NotFound"
    pub name: String,
    /// Code-style message identifier
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
