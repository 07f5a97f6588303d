//! [`StudentRepository`] for [`SqliteStore`].

use campus_core::{
  reference::ReferenceKind,
  store::StudentRepository,
  student::{Student, StudentInput},
};

use crate::{
  Error, Result, SqliteStore,
  registry::resolve_in,
  rows::{STUDENT_SELECT, student_from_row},
  store::{query_all, query_one, row_exists},
};

impl StudentRepository for SqliteStore {
  async fn add(&self, input: StudentInput) -> Result<i64> {
    if let Some(id) = input.id {
      return Err(Error::Invalid(format!("new student already has id {id}")));
    }

    self
      .write(move |tx| {
        let grade_id = resolve_in(tx, ReferenceKind::Grade, &input.grade)?.id();
        tx.execute(
          "INSERT INTO students (no, description, remarks, grade_id)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![input.no, input.description, input.remarks, grade_id],
        )?;
        Ok(tx.last_insert_rowid())
      })
      .await
  }

  async fn update(&self, input: StudentInput) -> Result<()> {
    let id = input
      .id
      .ok_or_else(|| Error::Invalid("student update needs an id".to_string()))?;

    self
      .write(move |tx| {
        // Check first so a missing student never leaves a new grade behind.
        if !row_exists(tx, "students", id)? {
          return Err(Error::StudentNotFound(id));
        }
        let grade_id = resolve_in(tx, ReferenceKind::Grade, &input.grade)?.id();
        tx.execute(
          "UPDATE students
           SET no = ?1, description = ?2, remarks = ?3, grade_id = ?4
           WHERE id = ?5",
          rusqlite::params![
            input.no,
            input.description,
            input.remarks,
            grade_id,
            id,
          ],
        )?;
        Ok(())
      })
      .await
  }

  async fn delete(&self, id: i64) -> Result<bool> {
    self
      .write(move |tx| {
        let n = tx.execute("DELETE FROM students WHERE id = ?1", rusqlite::params![id])?;
        Ok(n > 0)
      })
      .await
  }

  async fn find(&self, id: i64) -> Result<Option<Student>> {
    self
      .read(move |conn| {
        query_one(
          conn,
          &format!("{STUDENT_SELECT} WHERE s.id = ?1"),
          rusqlite::params![id],
          student_from_row,
        )
      })
      .await
  }

  async fn find_all(&self) -> Result<Vec<Student>> {
    self
      .read(|conn| {
        query_all(conn, &format!("{STUDENT_SELECT} ORDER BY s.id"), [], student_from_row)
      })
      .await
  }

  async fn find_all_by_grade(&self, grade_id: i64) -> Result<Vec<Student>> {
    self
      .read(move |conn| {
        query_all(
          conn,
          &format!("{STUDENT_SELECT} WHERE s.grade_id = ?1 ORDER BY s.id"),
          rusqlite::params![grade_id],
          student_from_row,
        )
      })
      .await
  }

  async fn find_all_by_no(&self, no: &str) -> Result<Vec<Student>> {
    let no = no.to_owned();
    self
      .read(move |conn| {
        query_all(
          conn,
          &format!("{STUDENT_SELECT} WHERE s.no = ?1 ORDER BY s.id"),
          rusqlite::params![no],
          student_from_row,
        )
      })
      .await
  }
}
