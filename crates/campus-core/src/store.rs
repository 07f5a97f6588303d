//! Storage traits implemented by backends (e.g. `campus-store-sqlite`).
//!
//! Higher layers depend on these abstractions, never on a concrete backend.
//! All methods return `Send` futures so the traits can be used from a
//! multi-threaded runtime (tokio with `axum`).

use std::future::Future;

use crate::{
  reference::{Department, Reference, ReferenceKind},
  selector::{NewDepartment, ReferenceSelector, Resolution},
  student::{Student, StudentInput},
  teacher::{Teacher, TeacherInput},
};

/// Shared by every storage trait so a single backend type has one error type.
pub trait Backend: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static + Into<crate::Error>;
}

// ─── Reference registry ──────────────────────────────────────────────────────

/// Maps partial reference input onto canonical stored rows.
///
/// This is the only place duplicate avoidance lives. Resolving the same
/// selector twice with no change in between yields the same id.
pub trait ReferenceRegistry: Backend {
  /// Resolve a flat reference. `ById` fails with not-found for a missing
  /// row; `ByNo` reuses the row with that `no` (leaving its description and
  /// remarks untouched) or creates one.
  fn resolve(
    &self,
    kind: ReferenceKind,
    selector: ReferenceSelector,
  ) -> impl Future<Output = Result<Resolution, Self::Error>> + Send + '_;

  /// Resolve a department, resolving its school first when a new department
  /// row has to be created.
  fn resolve_department(
    &self,
    selector: ReferenceSelector<NewDepartment>,
  ) -> impl Future<Output = Result<Resolution, Self::Error>> + Send + '_;

  fn find_reference(
    &self,
    kind: ReferenceKind,
    id: i64,
  ) -> impl Future<Output = Result<Option<Reference>, Self::Error>> + Send + '_;

  fn find_department(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Department>, Self::Error>> + Send + '_;

  fn list_references(
    &self,
    kind: ReferenceKind,
  ) -> impl Future<Output = Result<Vec<Reference>, Self::Error>> + Send + '_;

  fn list_departments(
    &self,
  ) -> impl Future<Output = Result<Vec<Department>, Self::Error>> + Send + '_;
}

// ─── Student repository ──────────────────────────────────────────────────────

/// CRUD over the `students` table.
///
/// Writes resolve the grade and write the student row as one atomic unit.
pub trait StudentRepository: Backend {
  /// Insert a new student and return its id. The input must not carry an id.
  fn add(
    &self,
    input: StudentInput,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Overwrite the student named by `input.id`. Fails with not-found if no
  /// such row exists, leaving the store untouched.
  fn update(
    &self,
    input: StudentInput,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Returns `false` if there was nothing to delete.
  fn delete(&self, id: i64)
  -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  fn find(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Student>, Self::Error>> + Send + '_;

  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Student>, Self::Error>> + Send + '_;

  /// Students whose grade foreign key equals `grade_id`.
  fn find_all_by_grade(
    &self,
    grade_id: i64,
  ) -> impl Future<Output = Result<Vec<Student>, Self::Error>> + Send + '_;

  /// Students whose own `no` matches exactly (case-sensitive).
  fn find_all_by_no<'a>(
    &'a self,
    no: &'a str,
  ) -> impl Future<Output = Result<Vec<Student>, Self::Error>> + Send + 'a;
}

// ─── Teacher repository ──────────────────────────────────────────────────────

/// CRUD over the `teachers` table. Same contract as [`StudentRepository`].
pub trait TeacherRepository: Backend {
  fn add(
    &self,
    input: TeacherInput,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  fn update(
    &self,
    input: TeacherInput,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn delete(&self, id: i64)
  -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  fn find(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Teacher>, Self::Error>> + Send + '_;

  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Teacher>, Self::Error>> + Send + '_;

  fn find_all_by_no<'a>(
    &'a self,
    no: &'a str,
  ) -> impl Future<Output = Result<Vec<Teacher>, Self::Error>> + Send + 'a;
}
