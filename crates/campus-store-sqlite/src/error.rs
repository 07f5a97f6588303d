//! Error type for `campus-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("sqlite error: {0}")]
  Sqlite(#[from] rusqlite::Error),

  #[error("invalid input: {0}")]
  Invalid(String),

  /// A `ById` reference selector named a row that does not exist.
  #[error("{kind} {id} not found")]
  ReferenceNotFound { kind: &'static str, id: i64 },

  #[error("student not found: {0}")]
  StudentNotFound(i64),

  #[error("teacher not found: {0}")]
  TeacherNotFound(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for campus_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::Database(e) => Self::Sql(Box::new(e)),
      Error::Sqlite(e) => Self::Sql(Box::new(e)),
      Error::Invalid(m) => Self::Validation(m),
      Error::ReferenceNotFound { kind, id } => Self::NotFound { entity: kind, id },
      Error::StudentNotFound(id) => Self::NotFound { entity: "student", id },
      Error::TeacherNotFound(id) => Self::NotFound { entity: "teacher", id },
    }
  }
}
