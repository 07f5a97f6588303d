//! Request bodies accepted by `POST` and `PUT`.
//!
//! Payloads are deliberately loose (every field optional or defaulted) so
//! that partial nested references deserialize; validation happens when they
//! are turned into core input types.

use axum::{Json, extract::rejection::JsonRejection};
use campus_core::{
  Error, Result,
  selector::{NewDepartment, ReferenceSelector},
  student::StudentInput,
  teacher::TeacherInput,
};
use serde::Deserialize;

/// A nested reference: any of id, no, description, remarks. Departments
/// additionally nest their school.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReferencePayload {
  pub id:          Option<i64>,
  pub no:          Option<String>,
  pub description: Option<String>,
  pub remarks:     Option<String>,
  pub school:      Option<Box<ReferencePayload>>,
}

impl ReferencePayload {
  pub fn into_selector(self) -> Result<ReferenceSelector> {
    ReferenceSelector::from_parts(self.id, self.no, self.description, self.remarks)
  }

  pub fn into_department_selector(self) -> Result<ReferenceSelector<NewDepartment>> {
    if let Some(id) = self.id {
      return Ok(ReferenceSelector::ById(id));
    }
    let school = self.school.map(|s| (*s).into_selector()).transpose()?;
    ReferenceSelector::department_from_parts(
      self.id,
      self.no,
      self.description,
      self.remarks,
      school,
    )
  }
}

fn required(
  field: &str,
  reference: Option<ReferencePayload>,
) -> Result<ReferencePayload> {
  reference.ok_or_else(|| Error::Validation(format!("missing {field}")))
}

// ─── Student ─────────────────────────────────────────────────────────────────

/// `{"id":1,"no":"0201","description":"...","remarks":"","grade":{...}}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPayload {
  pub id:          Option<i64>,
  #[serde(default)]
  pub no:          String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub remarks:     String,
  pub grade:       Option<ReferencePayload>,
}

impl StudentPayload {
  pub fn into_input(self) -> Result<StudentInput> {
    Ok(StudentInput {
      id:          self.id,
      no:          self.no,
      description: self.description,
      remarks:     self.remarks,
      grade:       required("grade", self.grade)?.into_selector()?,
    })
  }
}

// ─── Teacher ─────────────────────────────────────────────────────────────────

/// `{"name":"...","degree":{...},"department":{...,"school":{...}},"title":{...}}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeacherPayload {
  pub id:         Option<i64>,
  #[serde(default)]
  pub no:         String,
  #[serde(default)]
  pub name:       String,
  pub degree:     Option<ReferencePayload>,
  pub department: Option<ReferencePayload>,
  pub title:      Option<ReferencePayload>,
}

impl TeacherPayload {
  pub fn into_input(self) -> Result<TeacherInput> {
    Ok(TeacherInput {
      id:         self.id,
      no:         self.no,
      name:       self.name,
      degree:     required("degree", self.degree)?.into_selector()?,
      department: required("department", self.department)?
        .into_department_selector()?,
      title:      required("title", self.title)?.into_selector()?,
    })
  }
}

/// Turn an extracted body (or its rejection) into a validation result, so
/// unparseable JSON is reported like any other invalid input.
pub(crate) fn accept<T>(body: Result<Json<T>, JsonRejection>) -> Result<T> {
  body
    .map(|Json(payload)| payload)
    .map_err(|rejection| Error::Validation(rejection.body_text()))
}
