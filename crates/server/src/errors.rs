use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::api::response_errors::{AddExerciseError, LogError};

/// An error ready to be sent to the client
///
/// The body is always the plain text message, never JSON
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new<S: Into<String>>(code: StatusCode, message: S) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        AppError::new(StatusCode::NOT_FOUND, "not found")
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppError {}: {}", self.code, self.message)
    }
}

// Render AppError into a response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.code, self.message).into_response()
    }
}

// The typed route errors carry their own status codes; keep them
// instead of collapsing everything to 500
impl From<AddExerciseError> for AppError {
    fn from(err: AddExerciseError) -> Self {
        AppError::new(err.status_code(), err.to_string())
    }
}

impl From<LogError> for AppError {
    fn from(err: LogError) -> Self {
        AppError::new(err.status_code(), err.to_string())
    }
}
