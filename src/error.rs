//! Error handling for mergington-http
//!
//! This module maps directory errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::cmp::PartialEq;

use crate::directory::DirectoryError;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Directory error
    Directory(DirectoryError),

    /// The email failed the shape check at the boundary
    InvalidEmail(String),
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        Self::Directory(err)
    }
}

impl PartialEq<StatusCode> for AppError {
    fn eq(&self, status_code: &StatusCode) -> bool {
        let (error_status, _) = self.status_and_detail();
        &error_status == status_code
    }
}

impl AppError {
    /// Get the status code and detail message for this error
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            Self::Directory(DirectoryError::ActivityNotFound { .. }) => {
                (StatusCode::NOT_FOUND, "Activity not found".to_string())
            }
            Self::Directory(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::InvalidEmail(_) => {
                (StatusCode::BAD_REQUEST, "Invalid email address".to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();

        let body = Json(json!({
            "detail": detail,
        }));

        (status, body).into_response()
    }
}
