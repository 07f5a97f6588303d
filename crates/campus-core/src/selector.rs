//! Reference selectors: how an incoming entity names the reference rows it
//! points at.
//!
//! A nested reference in a request may carry an id, a `no`, or both. The
//! selector makes the choice explicit before anything touches the store: an
//! id always wins, otherwise the `no` is the dedup key, and a reference with
//! neither is rejected here rather than deep inside a transaction.

use crate::{Error, Result};

/// Fields used to create a flat reference row when no row with the same `no`
/// exists yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReference {
  pub no:          String,
  pub description: String,
  pub remarks:     String,
}

/// Fields used to create a department row.
///
/// The school is only consulted when no department with this `no` exists
/// yet, so a by-`no` reference to a known department may leave it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
  pub no:          String,
  pub description: String,
  pub remarks:     String,
  pub school:      Option<ReferenceSelector>,
}

/// Identifies a reference row either by its stored id or by its `no`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSelector<N = NewReference> {
  /// Must name an existing row; a stale id is an error, never a new row.
  ById(i64),
  /// Reuse the row with this `no`, or create one from the payload.
  ByNo(N),
}

impl ReferenceSelector {
  /// Build a selector from the loose fields of a request payload.
  pub fn from_parts(
    id:          Option<i64>,
    no:          Option<String>,
    description: Option<String>,
    remarks:     Option<String>,
  ) -> Result<Self> {
    if let Some(id) = id {
      return Ok(Self::ById(id));
    }
    let no = required_no(no)?;
    Ok(Self::ByNo(NewReference {
      no,
      description: description.unwrap_or_default(),
      remarks: remarks.unwrap_or_default(),
    }))
  }
}

impl ReferenceSelector<NewDepartment> {
  /// Like [`ReferenceSelector::from_parts`]. A missing school is accepted
  /// here and only rejected by the store if the department must be created.
  pub fn department_from_parts(
    id:          Option<i64>,
    no:          Option<String>,
    description: Option<String>,
    remarks:     Option<String>,
    school:      Option<ReferenceSelector>,
  ) -> Result<Self> {
    if let Some(id) = id {
      return Ok(Self::ById(id));
    }
    let no = required_no(no)?;
    Ok(Self::ByNo(NewDepartment {
      no,
      description: description.unwrap_or_default(),
      remarks: remarks.unwrap_or_default(),
      school,
    }))
  }
}

fn required_no(no: Option<String>) -> Result<String> {
  match no {
    Some(no) if !no.trim().is_empty() => Ok(no),
    _ => Err(Error::Validation(
      "reference needs either an id or a no".to_string(),
    )),
  }
}

/// Outcome of a resolve-or-create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
  Found(i64),
  Created(i64),
}

impl Resolution {
  pub fn id(self) -> i64 {
    match self {
      Self::Found(id) | Self::Created(id) => id,
    }
  }

  pub fn is_created(self) -> bool { matches!(self, Self::Created(_)) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn id_takes_precedence_over_no() {
    let sel = ReferenceSelector::from_parts(
      Some(2),
      Some("02".into()),
      Some("Eng".into()),
      None,
    )
    .unwrap();
    assert_eq!(sel, ReferenceSelector::ById(2));
  }

  #[test]
  fn no_only_keeps_creation_fields() {
    let sel =
      ReferenceSelector::from_parts(None, Some("02".into()), Some("Eng".into()), None)
        .unwrap();
    assert_eq!(
      sel,
      ReferenceSelector::ByNo(NewReference {
        no:          "02".into(),
        description: "Eng".into(),
        remarks:     String::new(),
      })
    );
  }

  #[test]
  fn neither_id_nor_no_is_rejected() {
    let err = ReferenceSelector::from_parts(None, None, Some("x".into()), None)
      .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
  }

  #[test]
  fn blank_no_counts_as_missing() {
    let err =
      ReferenceSelector::from_parts(None, Some("  ".into()), None, None).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
  }

  #[test]
  fn department_by_no_defers_school() {
    let sel = ReferenceSelector::department_from_parts(
      None,
      Some("0203".into()),
      None,
      None,
      None,
    )
    .unwrap();
    assert!(matches!(sel, ReferenceSelector::ByNo(ref d) if d.school.is_none()));

    let err =
      ReferenceSelector::department_from_parts(None, None, None, None, None)
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let by_id =
      ReferenceSelector::department_from_parts(Some(3), None, None, None, None)
        .unwrap();
    assert_eq!(by_id, ReferenceSelector::ById(3));
  }

  #[test]
  fn resolution_id_is_the_same_either_way() {
    assert_eq!(Resolution::Found(7).id(), 7);
    assert_eq!(Resolution::Created(7).id(), 7);
    assert!(Resolution::Created(7).is_created());
    assert!(!Resolution::Found(7).is_created());
  }
}
