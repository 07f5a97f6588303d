//! Students, the primary entities that belong to exactly one grade.

use crate::{reference::Grade, selector::ReferenceSelector};

/// A persisted student with its grade expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
  pub id:          i64,
  pub no:          String,
  pub description: String,
  pub remarks:     String,
  pub grade:       Grade,
}

/// A student as submitted for `add` or `update`.
///
/// `id` is `None` for a new student and names the row to overwrite on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentInput {
  pub id:          Option<i64>,
  pub no:          String,
  pub description: String,
  pub remarks:     String,
  pub grade:       ReferenceSelector,
}
