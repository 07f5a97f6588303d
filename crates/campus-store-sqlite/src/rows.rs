//! Table names, joined SELECT statements, and row mappers.
//!
//! Every primary-entity read joins its references back in, so the column
//! order of each SELECT below is mirrored exactly by its mapper.

use campus_core::{
  reference::{Department, Reference, ReferenceKind},
  student::Student,
  teacher::Teacher,
};
use rusqlite::Row;

pub fn table(kind: ReferenceKind) -> &'static str {
  match kind {
    ReferenceKind::Grade => "grades",
    ReferenceKind::Degree => "degrees",
    ReferenceKind::Title => "titles",
    ReferenceKind::School => "schools",
  }
}

// ─── References ──────────────────────────────────────────────────────────────

/// Read four consecutive `id, no, description, remarks` columns.
pub fn reference_at(row: &Row<'_>, at: usize) -> rusqlite::Result<Reference> {
  Ok(Reference {
    id:          row.get(at)?,
    no:          row.get(at + 1)?,
    description: row.get(at + 2)?,
    remarks:     row.get(at + 3)?,
  })
}

pub fn reference_from_row(row: &Row<'_>) -> rusqlite::Result<Reference> {
  reference_at(row, 0)
}

pub const DEPARTMENT_SELECT: &str = "
  SELECT dp.id, dp.no, dp.description, dp.remarks,
         sc.id, sc.no, sc.description, sc.remarks
  FROM departments dp
  JOIN schools sc ON sc.id = dp.school_id";

/// Read a department followed by its school: eight columns.
pub fn department_at(row: &Row<'_>, at: usize) -> rusqlite::Result<Department> {
  Ok(Department {
    id:          row.get(at)?,
    no:          row.get(at + 1)?,
    description: row.get(at + 2)?,
    remarks:     row.get(at + 3)?,
    school:      reference_at(row, at + 4)?,
  })
}

pub fn department_from_row(row: &Row<'_>) -> rusqlite::Result<Department> {
  department_at(row, 0)
}

// ─── Students ────────────────────────────────────────────────────────────────

pub const STUDENT_SELECT: &str = "
  SELECT s.id, s.no, s.description, s.remarks,
         g.id, g.no, g.description, g.remarks
  FROM students s
  JOIN grades g ON g.id = s.grade_id";

pub fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
  Ok(Student {
    id:          row.get(0)?,
    no:          row.get(1)?,
    description: row.get(2)?,
    remarks:     row.get(3)?,
    grade:       reference_at(row, 4)?,
  })
}

// ─── Teachers ────────────────────────────────────────────────────────────────

pub const TEACHER_SELECT: &str = "
  SELECT t.id, t.no, t.name,
         d.id, d.no, d.description, d.remarks,
         dp.id, dp.no, dp.description, dp.remarks,
         sc.id, sc.no, sc.description, sc.remarks,
         ti.id, ti.no, ti.description, ti.remarks
  FROM teachers t
  JOIN degrees d      ON d.id  = t.degree_id
  JOIN departments dp ON dp.id = t.department_id
  JOIN schools sc     ON sc.id = dp.school_id
  JOIN titles ti      ON ti.id = t.title_id";

pub fn teacher_from_row(row: &Row<'_>) -> rusqlite::Result<Teacher> {
  Ok(Teacher {
    id:         row.get(0)?,
    no:         row.get(1)?,
    name:       row.get(2)?,
    degree:     reference_at(row, 3)?,
    department: department_at(row, 7)?,
    title:      reference_at(row, 15)?,
  })
}
