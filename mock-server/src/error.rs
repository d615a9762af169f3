//! Business errors and their HTTP mapping.
//!
//! Every variant is answered as `{"message": "..."}`, which is the shape the
//! client reads to explain a rejection to the user.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Room type not found";
pub const REQUIRED_FIELDS_MESSAGE: &str =
    "All fields (name, description, capacity, rate) are required.";
pub const CAPACITY_MESSAGE: &str = "Maximum capacity must be greater than zero.";
pub const RATE_MESSAGE: &str = "Standard rate must be greater than zero.";
pub const DUPLICATE_NAME_MESSAGE: &str = "A room type with this name already exists.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Room type not found")]
    NotFound,

    /// Input failed validation.
    #[error("{0}")]
    Invalid(&'static str),

    /// Another room type already uses the requested name.
    #[error("A room type with this name already exists.")]
    DuplicateName,
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Invalid(_) => StatusCode::BAD_REQUEST,
            ServiceError::DuplicateName => StatusCode::CONFLICT,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
