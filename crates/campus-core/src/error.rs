//! Error taxonomy shared by every campus crate.
//!
//! Storage backends keep their own error enums and convert into this one at
//! the service boundary, so callers can tell database failures apart from
//! everything else without knowing which backend is in use.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Malformed or ambiguous input, e.g. a reference with neither id nor no.
  #[error("validation error: {0}")]
  Validation(String),

  #[error("{entity} {id} not found")]
  NotFound { entity: &'static str, id: i64 },

  /// A store-level failure while reading or writing.
  #[error("database error: {0}")]
  Sql(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("unexpected error: {0}")]
  Unexpected(String),
}

impl Error {
  pub fn is_sql(&self) -> bool { matches!(self, Self::Sql(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
