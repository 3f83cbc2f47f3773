//! Defines the app level error type and its conversion to JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One of the required transaction fields (amount, description, date,
    /// category) was missing, null or empty in the request body.
    ///
    /// The client should resubmit the request with all four fields set.
    #[error("missing fields")]
    MissingFields,

    /// The date string in the request body could not be parsed as either a
    /// calendar date (e.g. "2024-01-05") or an ISO-8601 timestamp.
    #[error("could not parse \"{0}\" as a date")]
    InvalidDate(String),

    /// The transaction ID in the request path could not be parsed into the
    /// store's key type.
    ///
    /// This is distinct from [Error::NotFound]: the ID is malformed, so no
    /// lookup was attempted.
    #[error("\"{0}\" is not a valid transaction ID")]
    InvalidId(String),

    /// The requested transaction could not be found.
    ///
    /// The client should check that the ID is correct and that the
    /// transaction has not been deleted.
    #[error("the requested transaction could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLock,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::MissingFields => (StatusCode::BAD_REQUEST, "Missing fields".to_owned()),
            Error::InvalidDate(date) => {
                (StatusCode::BAD_REQUEST, format!("Invalid date: {date}"))
            }
            Error::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid transaction ID: {id}"),
            ),
            Error::NotFound => (StatusCode::NOT_FOUND, "Transaction not found".to_owned()),
            Error::SqlError(_) | Error::DatabaseLock => {
                tracing::error!("Responding with internal server error: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
