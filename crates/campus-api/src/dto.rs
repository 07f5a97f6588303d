//! Response shapes.
//!
//! Entities are converted into these flat structs before serialisation, so
//! the JSON that leaves the server is exactly the declared nesting (entity →
//! references → a department's school) and nothing deeper.

use campus_core::{
  reference::{Department, Reference},
  student::Student,
  teacher::Teacher,
};
use serde::Serialize;

/// The `{"message": ...}` status body returned by write endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Message {
  pub message: &'static str,
}

impl Message {
  pub const ADDED: Self = Self { message: "added" };
  pub const DB_ERROR: Self = Self { message: "db-error" };
  pub const DELETED: Self = Self { message: "deleted" };
  pub const FAILED: Self = Self { message: "failed" };
  pub const OTHER_ERROR: Self = Self { message: "other-error" };
  pub const UPDATED: Self = Self { message: "updated" };
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceDto {
  pub id:          i64,
  pub no:          String,
  pub description: String,
  pub remarks:     String,
}

impl From<&Reference> for ReferenceDto {
  fn from(r: &Reference) -> Self {
    Self {
      id:          r.id,
      no:          r.no.clone(),
      description: r.description.clone(),
      remarks:     r.remarks.clone(),
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentDto {
  pub id:          i64,
  pub no:          String,
  pub description: String,
  pub remarks:     String,
  pub school:      ReferenceDto,
}

impl From<&Department> for DepartmentDto {
  fn from(d: &Department) -> Self {
    Self {
      id:          d.id,
      no:          d.no.clone(),
      description: d.description.clone(),
      remarks:     d.remarks.clone(),
      school:      ReferenceDto::from(&d.school),
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentDto {
  pub id:          i64,
  pub no:          String,
  pub description: String,
  pub remarks:     String,
  pub grade:       ReferenceDto,
}

impl From<&Student> for StudentDto {
  fn from(s: &Student) -> Self {
    Self {
      id:          s.id,
      no:          s.no.clone(),
      description: s.description.clone(),
      remarks:     s.remarks.clone(),
      grade:       ReferenceDto::from(&s.grade),
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeacherDto {
  pub id:         i64,
  pub no:         String,
  pub name:       String,
  pub degree:     ReferenceDto,
  pub department: DepartmentDto,
  pub title:      ReferenceDto,
}

impl From<&Teacher> for TeacherDto {
  fn from(t: &Teacher) -> Self {
    Self {
      id:         t.id,
      no:         t.no.clone(),
      name:       t.name.clone(),
      degree:     ReferenceDto::from(&t.degree),
      department: DepartmentDto::from(&t.department),
      title:      ReferenceDto::from(&t.title),
    }
  }
}

/// Convert a slice of entities into their response shapes.
pub fn many<'a, T, D>(items: &'a [T]) -> Vec<D>
where
  D: From<&'a T>,
{
  items.iter().map(D::from).collect()
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn school() -> Reference {
    Reference {
      id:          2,
      no:          "02".into(),
      description: "Engineering".into(),
      remarks:     String::new(),
    }
  }

  #[test]
  fn teacher_serialises_to_declared_nesting() {
    let reference = |id, no: &str, description: &str| Reference {
      id,
      no: no.into(),
      description: description.into(),
      remarks: String::new(),
    };
    let teacher = Teacher {
      id:         1,
      no:         String::new(),
      name:       "new teacher".into(),
      degree:     reference(3, "01", "PhD"),
      department: Department {
        id:          3,
        no:          "0203".into(),
        description: "Environmental Engineering".into(),
        remarks:     String::new(),
        school:      school(),
      },
      title:      reference(1, "01", "Professor"),
    };

    let value = serde_json::to_value(TeacherDto::from(&teacher)).unwrap();
    assert_eq!(
      value,
      json!({
        "id": 1,
        "no": "",
        "name": "new teacher",
        "degree": {"id": 3, "no": "01", "description": "PhD", "remarks": ""},
        "department": {
          "id": 3,
          "no": "0203",
          "description": "Environmental Engineering",
          "remarks": "",
          "school": {"id": 2, "no": "02", "description": "Engineering", "remarks": ""}
        },
        "title": {"id": 1, "no": "01", "description": "Professor", "remarks": ""}
      })
    );
  }

  #[test]
  fn students_sharing_a_grade_serialise_the_grade_inline_each_time() {
    let grade = school();
    let students: Vec<Student> = (1..=2)
      .map(|id| Student {
        id,
        no: format!("020{id}"),
        description: String::new(),
        remarks: String::new(),
        grade: grade.clone(),
      })
      .collect();

    let dtos: Vec<StudentDto> = many(&students);
    let value = serde_json::to_value(&dtos).unwrap();
    assert_eq!(value[0]["grade"], value[1]["grade"]);
    assert_eq!(value[1]["grade"]["id"], 2);
  }

  #[test]
  fn message_body_shape() {
    let value = serde_json::to_value(Message::ADDED).unwrap();
    assert_eq!(value, json!({"message": "added"}));
  }
}
