//! [`TeacherRepository`] for [`SqliteStore`].

use campus_core::{
  reference::ReferenceKind,
  store::TeacherRepository,
  teacher::{Teacher, TeacherInput},
};
use rusqlite::Connection;

use crate::{
  Error, Result, SqliteStore,
  registry::{resolve_department_in, resolve_in},
  rows::{TEACHER_SELECT, teacher_from_row},
  store::{query_all, query_one, row_exists},
};

/// Foreign keys of a teacher row, resolved in the caller's transaction.
struct TeacherKeys {
  degree_id:     i64,
  department_id: i64,
  title_id:      i64,
}

fn resolve_keys(conn: &Connection, input: &TeacherInput) -> Result<TeacherKeys> {
  Ok(TeacherKeys {
    degree_id:     resolve_in(conn, ReferenceKind::Degree, &input.degree)?.id(),
    department_id: resolve_department_in(conn, &input.department)?.id(),
    title_id:      resolve_in(conn, ReferenceKind::Title, &input.title)?.id(),
  })
}

impl TeacherRepository for SqliteStore {
  async fn add(&self, input: TeacherInput) -> Result<i64> {
    if let Some(id) = input.id {
      return Err(Error::Invalid(format!("new teacher already has id {id}")));
    }

    self
      .write(move |tx| {
        let keys = resolve_keys(tx, &input)?;
        tx.execute(
          "INSERT INTO teachers (no, name, degree_id, department_id, title_id)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            input.no,
            input.name,
            keys.degree_id,
            keys.department_id,
            keys.title_id,
          ],
        )?;
        Ok(tx.last_insert_rowid())
      })
      .await
  }

  async fn update(&self, input: TeacherInput) -> Result<()> {
    let id = input
      .id
      .ok_or_else(|| Error::Invalid("teacher update needs an id".to_string()))?;

    self
      .write(move |tx| {
        if !row_exists(tx, "teachers", id)? {
          return Err(Error::TeacherNotFound(id));
        }
        let keys = resolve_keys(tx, &input)?;
        tx.execute(
          "UPDATE teachers
           SET no = ?1, name = ?2, degree_id = ?3, department_id = ?4, title_id = ?5
           WHERE id = ?6",
          rusqlite::params![
            input.no,
            input.name,
            keys.degree_id,
            keys.department_id,
            keys.title_id,
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
        let n = tx.execute("DELETE FROM teachers WHERE id = ?1", rusqlite::params![id])?;
        Ok(n > 0)
      })
      .await
  }

  async fn find(&self, id: i64) -> Result<Option<Teacher>> {
    self
      .read(move |conn| {
        query_one(
          conn,
          &format!("{TEACHER_SELECT} WHERE t.id = ?1"),
          rusqlite::params![id],
          teacher_from_row,
        )
      })
      .await
  }

  async fn find_all(&self) -> Result<Vec<Teacher>> {
    self
      .read(|conn| {
        query_all(conn, &format!("{TEACHER_SELECT} ORDER BY t.id"), [], teacher_from_row)
      })
      .await
  }

  async fn find_all_by_no(&self, no: &str) -> Result<Vec<Teacher>> {
    let no = no.to_owned();
    self
      .read(move |conn| {
        query_all(
          conn,
          &format!("{TEACHER_SELECT} WHERE t.no = ?1 ORDER BY t.id"),
          rusqlite::params![no],
          teacher_from_row,
        )
      })
      .await
  }
}
