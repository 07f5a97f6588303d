//! Reference entities: the shared lookup rows students and teachers point at.
//!
//! Grades, degrees, titles and schools share one flat shape. A department has
//! the same fields plus the school it belongs to.

use strum::{Display, EnumString, IntoStaticStr};

/// The flat reference tables. Departments are handled separately because
/// they nest a school.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ReferenceKind {
  Grade,
  Degree,
  Title,
  School,
}

impl ReferenceKind {
  pub const ALL: [ReferenceKind; 4] =
    [Self::Grade, Self::Degree, Self::Title, Self::School];

  /// Lowercase singular name, used in logs and not-found errors.
  pub fn name(self) -> &'static str { self.into() }
}

/// A stored reference row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
  pub id:          i64,
  /// External business code, e.g. `"0201"`. Used as the dedup key.
  pub no:          String,
  pub description: String,
  pub remarks:     String,
}

pub type Grade = Reference;
pub type Degree = Reference;
pub type Title = Reference;
pub type School = Reference;

/// A stored department row with its school expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
  pub id:          i64,
  pub no:          String,
  pub description: String,
  pub remarks:     String,
  pub school:      School,
}
