//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Failed reads answer with the same `{"message": ...}` body the write
//! endpoints use: `db-error` for store failures, `other-error` for the rest.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::dto::Message;

/// An error returned by a read handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// A query parameter or path segment that could not be understood.
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error(transparent)]
  Core(#[from] campus_core::Error),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    use campus_core::Error as Core;

    let (status, message) = match &self {
      ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, Message::OTHER_ERROR),
      ApiError::Core(Core::Validation(_)) => {
        (StatusCode::BAD_REQUEST, Message::OTHER_ERROR)
      }
      ApiError::Core(Core::NotFound { .. }) => {
        (StatusCode::NOT_FOUND, Message::OTHER_ERROR)
      }
      ApiError::Core(Core::Sql(_)) => {
        (StatusCode::INTERNAL_SERVER_ERROR, Message::DB_ERROR)
      }
      ApiError::Core(Core::Unexpected(_)) => {
        (StatusCode::INTERNAL_SERVER_ERROR, Message::OTHER_ERROR)
      }
    };
    tracing::warn!(error = %self, %status, "request failed");
    (status, Json(message)).into_response()
  }
}

/// Parse an integer query parameter.
pub(crate) fn parse_id(name: &str, raw: &str) -> Result<i64, ApiError> {
  raw
    .trim()
    .parse()
    .map_err(|_| ApiError::BadRequest(format!("{name} must be an integer, got {raw:?}")))
}
