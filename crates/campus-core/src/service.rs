//! Query services: the access points the HTTP layer talks to.
//!
//! One service per entity type, each holding a shared handle to its
//! repository. They are built once at startup and handed to request handlers
//! through application state. `add` and `delete` collapse every failure into
//! `false`; `update` and the finders keep the error taxonomy so the caller
//! can tell database failures from the rest.

use std::sync::Arc;

use crate::{
  Error, Result,
  store::{StudentRepository, TeacherRepository},
  student::{Student, StudentInput},
  teacher::{Teacher, TeacherInput},
};

// ─── Students ────────────────────────────────────────────────────────────────

pub struct StudentService<R> {
  repository: Arc<R>,
}

impl<R> Clone for StudentService<R> {
  fn clone(&self) -> Self { Self { repository: Arc::clone(&self.repository) } }
}

impl<R: StudentRepository> StudentService<R> {
  pub fn new(repository: Arc<R>) -> Self { Self { repository } }

  pub async fn add(&self, student: StudentInput) -> bool {
    match self.repository.add(student).await {
      Ok(id) => {
        tracing::info!(id, "student added");
        true
      }
      Err(e) => {
        let e: Error = e.into();
        tracing::warn!(error = %e, "failed to add student");
        false
      }
    }
  }

  pub async fn update(&self, student: StudentInput) -> Result<()> {
    let id = student.id;
    self.repository.update(student).await.map_err(|e| {
      let e: Error = e.into();
      tracing::warn!(?id, error = %e, "failed to update student");
      e
    })?;
    tracing::info!(?id, "student updated");
    Ok(())
  }

  pub async fn delete(&self, id: i64) -> bool {
    match self.repository.delete(id).await {
      Ok(deleted) => {
        tracing::info!(id, deleted, "student delete");
        deleted
      }
      Err(e) => {
        let e: Error = e.into();
        tracing::warn!(id, error = %e, "failed to delete student");
        false
      }
    }
  }

  pub async fn find(&self, id: i64) -> Result<Student> {
    self
      .repository
      .find(id)
      .await
      .map_err(Into::<Error>::into)?
      .ok_or(Error::NotFound { entity: "student", id })
  }

  pub async fn find_all(&self) -> Result<Vec<Student>> {
    self.repository.find_all().await.map_err(Into::into)
  }

  pub async fn find_all_by_grade(&self, grade_id: i64) -> Result<Vec<Student>> {
    self
      .repository
      .find_all_by_grade(grade_id)
      .await
      .map_err(Into::into)
  }

  pub async fn find_all_by_no(&self, no: &str) -> Result<Vec<Student>> {
    self.repository.find_all_by_no(no).await.map_err(Into::into)
  }
}

// ─── Teachers ────────────────────────────────────────────────────────────────

pub struct TeacherService<R> {
  repository: Arc<R>,
}

impl<R> Clone for TeacherService<R> {
  fn clone(&self) -> Self { Self { repository: Arc::clone(&self.repository) } }
}

impl<R: TeacherRepository> TeacherService<R> {
  pub fn new(repository: Arc<R>) -> Self { Self { repository } }

  pub async fn add(&self, teacher: TeacherInput) -> bool {
    match self.repository.add(teacher).await {
      Ok(id) => {
        tracing::info!(id, "teacher added");
        true
      }
      Err(e) => {
        let e: Error = e.into();
        tracing::warn!(error = %e, "failed to add teacher");
        false
      }
    }
  }

  pub async fn update(&self, teacher: TeacherInput) -> Result<()> {
    let id = teacher.id;
    self.repository.update(teacher).await.map_err(|e| {
      let e: Error = e.into();
      tracing::warn!(?id, error = %e, "failed to update teacher");
      e
    })?;
    tracing::info!(?id, "teacher updated");
    Ok(())
  }

  pub async fn delete(&self, id: i64) -> bool {
    match self.repository.delete(id).await {
      Ok(deleted) => {
        tracing::info!(id, deleted, "teacher delete");
        deleted
      }
      Err(e) => {
        let e: Error = e.into();
        tracing::warn!(id, error = %e, "failed to delete teacher");
        false
      }
    }
  }

  pub async fn find(&self, id: i64) -> Result<Teacher> {
    self
      .repository
      .find(id)
      .await
      .map_err(Into::<Error>::into)?
      .ok_or(Error::NotFound { entity: "teacher", id })
  }

  pub async fn find_all(&self) -> Result<Vec<Teacher>> {
    self.repository.find_all().await.map_err(Into::into)
  }

  pub async fn find_all_by_no(&self, no: &str) -> Result<Vec<Teacher>> {
    self.repository.find_all_by_no(no).await.map_err(Into::into)
  }
}
