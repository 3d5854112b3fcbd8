use axum::http::StatusCode;
use std::fmt;

const SHORTEN_ERROR_PREFIX: &str = "Failed to shorten URL: ";

/// Failure of a single backend round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "backend returned {status}: {}", self.message),
            None => write!(f, "backend unreachable: {}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::status(status.as_u16(), err.to_string()),
            None => Self::transport(err.to_string()),
        }
    }
}

/// Errors that are shown to the user. Every other failure is absorbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// Login or registration rejected; the server text is shown verbatim.
    Auth(String),
    /// Shortening rejected; shown with a fixed prefix.
    Shorten(String),
}

impl UserError {
    pub fn auth(err: ApiError) -> Self {
        UserError::Auth(err.message)
    }

    pub fn shorten(err: ApiError) -> Self {
        UserError::Shorten(err.message)
    }
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserError::Auth(msg) => write!(f, "{msg}"),
            UserError::Shorten(msg) => write!(f, "{SHORTEN_ERROR_PREFIX}{msg}"),
        }
    }
}

impl std::error::Error for UserError {}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
