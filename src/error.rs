use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    EnvError(std::env::VarError),
    InvalidAuthMethod(String),
    MissingToken,
    InvalidToken,
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::EnvError(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EnvError(e) => write!(f, "environment variable error: {e}"),
            AppError::InvalidAuthMethod(value) => write!(f, "invalid AUTH_METHOD: {value}"),
            AppError::MissingToken => write!(f, "No token provided"),
            AppError::InvalidToken => write!(f, "Invalid token"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::EnvError(e) => Some(e),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::EnvError(_) | AppError::InvalidAuthMethod(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::MissingToken | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
