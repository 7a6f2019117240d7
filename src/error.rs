//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_ID: &str = "Invalid ID format";
pub const INVALID_BODY: &str = "Invalid request body";
pub const BODY_TOO_LARGE: &str = "Request body too large";
pub const ITEM_NOT_FOUND: &str = "Item not found";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Failure kinds returned by repository operations.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("item not found: {0}")]
    NotFound(i64),
    #[error("database: {0}")]
    Storage(#[from] sqlx::Error),
}

/// The item operation a request performs; selects the 500 message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Create => "Failed to create item",
            Operation::List => "Failed to fetch items",
            Operation::Get => "Failed to fetch item",
            Operation::Update => "Failed to update item",
            Operation::Delete => "Failed to delete item",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{}", ITEM_NOT_FOUND)]
    NotFound,
    #[error("{}", BODY_TOO_LARGE)]
    PayloadTooLarge,
    /// Storage detail stays in `source` and the server log; the client only sees `message`.
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /// Map a repository failure for `op` onto its HTTP kind. Storage failures are logged here.
    pub fn from_repo(op: Operation, err: RepoError) -> Self {
        match err {
            RepoError::Validation(message) => AppError::Validation(message),
            RepoError::NotFound(_) => AppError::NotFound,
            RepoError::Storage(source) => {
                let message = op.failure_message();
                tracing::error!(operation = ?op, error = %source, "{}", message);
                AppError::Storage { message, source }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
