//! SQL schema for the campus SQLite store.
//!
//! Executed once at connection startup. Reference tables have no UNIQUE
//! constraint on `no`; deduplication happens in the registry inside an
//! immediate transaction, and lookups pick the lowest id when legacy rows
//! share a `no`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS schools (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    no          TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    remarks     TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS grades (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    no          TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    remarks     TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS degrees (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    no          TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    remarks     TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS titles (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    no          TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    remarks     TEXT NOT NULL DEFAULT ''
);

-- A department references its school; it does not own it.
CREATE TABLE IF NOT EXISTS departments (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    no          TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    remarks     TEXT NOT NULL DEFAULT '',
    school_id   INTEGER NOT NULL REFERENCES schools(id)
);

CREATE TABLE IF NOT EXISTS students (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    no          TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    remarks     TEXT NOT NULL DEFAULT '',
    grade_id    INTEGER NOT NULL REFERENCES grades(id)
);

CREATE TABLE IF NOT EXISTS teachers (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    no            TEXT NOT NULL DEFAULT '',
    name          TEXT NOT NULL,
    degree_id     INTEGER NOT NULL REFERENCES degrees(id),
    department_id INTEGER NOT NULL REFERENCES departments(id),
    title_id      INTEGER NOT NULL REFERENCES titles(id)
);

CREATE INDEX IF NOT EXISTS schools_no_idx     ON schools(no);
CREATE INDEX IF NOT EXISTS grades_no_idx      ON grades(no);
CREATE INDEX IF NOT EXISTS degrees_no_idx     ON degrees(no);
CREATE INDEX IF NOT EXISTS titles_no_idx      ON titles(no);
CREATE INDEX IF NOT EXISTS departments_no_idx ON departments(no);
CREATE INDEX IF NOT EXISTS students_no_idx    ON students(no);
CREATE INDEX IF NOT EXISTS students_grade_idx ON students(grade_id);
CREATE INDEX IF NOT EXISTS teachers_no_idx    ON teachers(no);

PRAGMA user_version = 1;
";
