use crate::repository;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("notification not exist")]
    NotificationNotExist,

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("validation error: message too large {size}/{max_size}B")]
    ValidationMessageTooLarge { size: usize, max_size: usize },

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryRejection),

    ///
    /// Database failure while creating or updating notification.
    /// Reported to the caller as a client error.
    ///
    #[error("notification deletion time out of range")]
    DeletionTimeOutOfRange,

    #[error("database write error: {0}")]
    DatabaseWrite(repository::Error),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let status = match &self {
            Error::NotificationNotExist => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::ValidationMessageTooLarge {
                size: _,
                max_size: _,
            } => StatusCode::BAD_REQUEST,
            Error::InvalidBody(rejection) => match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::BAD_REQUEST,
            },
            Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Error::DeletionTimeOutOfRange => StatusCode::INTERNAL_SERVER_ERROR,
            Error::DatabaseWrite(_) => StatusCode::BAD_REQUEST,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
