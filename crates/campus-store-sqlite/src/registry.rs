//! Resolve-or-create for reference rows, and the [`ReferenceRegistry`] impl.
//!
//! The free functions take a plain connection so repositories can call them
//! inside the same transaction as their own row write.

use campus_core::{
  reference::{Department, Reference, ReferenceKind},
  selector::{NewDepartment, ReferenceSelector, Resolution},
  store::ReferenceRegistry,
};
use rusqlite::Connection;

use crate::{
  Error, Result, SqliteStore,
  rows::{DEPARTMENT_SELECT, department_from_row, reference_from_row, table},
  store::{query_all, query_one, row_exists},
};

// ─── Resolution ──────────────────────────────────────────────────────────────

fn find_id_by_no(conn: &Connection, table: &str, no: &str) -> Result<Option<i64>> {
  query_one(
    conn,
    &format!("SELECT id FROM {table} WHERE no = ?1 ORDER BY id LIMIT 1"),
    rusqlite::params![no],
    |r| r.get(0),
  )
}

/// Map a flat reference selector to a stored row id, creating the row if a
/// `no` is not yet known. Existing rows are never modified.
pub(crate) fn resolve_in(
  conn: &Connection,
  kind: ReferenceKind,
  selector: &ReferenceSelector,
) -> Result<Resolution> {
  let table = table(kind);
  match selector {
    ReferenceSelector::ById(id) => {
      if row_exists(conn, table, *id)? {
        Ok(Resolution::Found(*id))
      } else {
        Err(Error::ReferenceNotFound { kind: kind.name(), id: *id })
      }
    }
    ReferenceSelector::ByNo(new) => {
      if let Some(id) = find_id_by_no(conn, table, &new.no)? {
        return Ok(Resolution::Found(id));
      }
      conn.execute(
        &format!("INSERT INTO {table} (no, description, remarks) VALUES (?1, ?2, ?3)"),
        rusqlite::params![new.no, new.description, new.remarks],
      )?;
      let id = conn.last_insert_rowid();
      tracing::debug!(kind = kind.name(), id, no = %new.no, "reference created");
      Ok(Resolution::Created(id))
    }
  }
}

/// Department counterpart of [`resolve_in`]. The school is only resolved
/// when a new department row is created, and only then is it required.
pub(crate) fn resolve_department_in(
  conn: &Connection,
  selector: &ReferenceSelector<NewDepartment>,
) -> Result<Resolution> {
  match selector {
    ReferenceSelector::ById(id) => {
      if row_exists(conn, "departments", *id)? {
        Ok(Resolution::Found(*id))
      } else {
        Err(Error::ReferenceNotFound { kind: "department", id: *id })
      }
    }
    ReferenceSelector::ByNo(new) => {
      if let Some(id) = find_id_by_no(conn, "departments", &new.no)? {
        return Ok(Resolution::Found(id));
      }
      let school = new.school.as_ref().ok_or_else(|| {
        Error::Invalid(format!("new department {:?} has no school", new.no))
      })?;
      let school_id = resolve_in(conn, ReferenceKind::School, school)?.id();
      conn.execute(
        "INSERT INTO departments (no, description, remarks, school_id)
         VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![new.no, new.description, new.remarks, school_id],
      )?;
      let id = conn.last_insert_rowid();
      tracing::debug!(id, school_id, no = %new.no, "department created");
      Ok(Resolution::Created(id))
    }
  }
}

// ─── ReferenceRegistry impl ──────────────────────────────────────────────────

impl ReferenceRegistry for SqliteStore {
  async fn resolve(
    &self,
    kind: ReferenceKind,
    selector: ReferenceSelector,
  ) -> Result<Resolution> {
    self.write(move |tx| resolve_in(tx, kind, &selector)).await
  }

  async fn resolve_department(
    &self,
    selector: ReferenceSelector<NewDepartment>,
  ) -> Result<Resolution> {
    self.write(move |tx| resolve_department_in(tx, &selector)).await
  }

  async fn find_reference(
    &self,
    kind: ReferenceKind,
    id: i64,
  ) -> Result<Option<Reference>> {
    self
      .read(move |conn| {
        query_one(
          conn,
          &format!(
            "SELECT id, no, description, remarks FROM {} WHERE id = ?1",
            table(kind)
          ),
          rusqlite::params![id],
          reference_from_row,
        )
      })
      .await
  }

  async fn find_department(&self, id: i64) -> Result<Option<Department>> {
    self
      .read(move |conn| {
        query_one(
          conn,
          &format!("{DEPARTMENT_SELECT} WHERE dp.id = ?1"),
          rusqlite::params![id],
          department_from_row,
        )
      })
      .await
  }

  async fn list_references(&self, kind: ReferenceKind) -> Result<Vec<Reference>> {
    self
      .read(move |conn| {
        query_all(
          conn,
          &format!(
            "SELECT id, no, description, remarks FROM {} ORDER BY id",
            table(kind)
          ),
          [],
          reference_from_row,
        )
      })
      .await
  }

  async fn list_departments(&self) -> Result<Vec<Department>> {
    self
      .read(|conn| {
        query_all(
          conn,
          &format!("{DEPARTMENT_SELECT} ORDER BY dp.id"),
          [],
          department_from_row,
        )
      })
      .await
  }
}
