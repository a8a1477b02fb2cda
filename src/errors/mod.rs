use std::io::Error as IoError;

use actix_web::{
    error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError,
};
use log::error;
use serde_json::json;
use thiserror::Error;

pub mod config;
pub mod repository;

pub use config::ConfigError;
pub use repository::RepositoryError;

use crate::db::DatabaseError;

pub const URL_REQUIRED: &str = "URL is required";
pub const SHORT_URL_NOT_FOUND: &str = "Short URL not found";
const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    // Request-level errors, rendered to the caller
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found error: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
    // Infrastructure/system errors
    #[error("Server error: {0}")]
    Server(#[from] IoError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Logger error: {0}")]
    Logger(String),
    #[error("Store error: {0}")]
    Store(String),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<DatabaseError> for AppError {
    fn from(e: DatabaseError) -> Self {
        AppError::Store(e.to_string())
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Only the messages reach the caller, field names stay internal
        let mut messages = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "invalid".to_string())
            })
            .collect::<Vec<_>>();
        messages.dedup();
        AppError::Validation(messages.join("; "))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_)
            | AppError::Server(_)
            | AppError::Config(_)
            | AppError::Logger(_)
            | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.as_str(),
            _ => {
                error!("{}", self);
                INTERNAL_SERVER_ERROR
            }
        };

        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

/// Maps JSON extractor failures onto the `{"error": ...}` body shape.
///
/// A request without a JSON body carries no `url` at all, so it is reported
/// the same way as an empty object.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => URL_REQUIRED.to_string(),
        JsonPayloadError::Deserialize(e) if e.is_eof() => URL_REQUIRED.to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid JSON body: {}", e),
        _ => format!("Invalid request body: {}", err),
    };
    AppError::Validation(message).into()
}
