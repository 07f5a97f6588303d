//! Teachers, the primary entities holding a degree, a department and a title.

use crate::{
  reference::{Degree, Department, Title},
  selector::{NewDepartment, ReferenceSelector},
};

/// A persisted teacher with every reference expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
  pub id:         i64,
  pub no:         String,
  pub name:       String,
  pub degree:     Degree,
  pub department: Department,
  pub title:      Title,
}

/// A teacher as submitted for `add` or `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherInput {
  pub id:         Option<i64>,
  pub no:         String,
  pub name:       String,
  pub degree:     ReferenceSelector,
  pub department: ReferenceSelector<NewDepartment>,
  pub title:      ReferenceSelector,
}
