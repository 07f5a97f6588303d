//! JSON HTTP boundary for the campus registry.
//!
//! Exposes an axum [`Router`] backed by any store implementing the campus
//! storage traits. One query service per entity type is built when the
//! [`AppState`] is created and shared by every request.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let state = campus_api::AppState::new(Arc::new(store));
//! axum::serve(listener, campus_api::router(state)).await?;
//! ```

pub mod dto;
pub mod error;
pub mod payload;
pub mod references;
pub mod students;
pub mod teachers;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use campus_core::{
  service::{StudentService, TeacherService},
  store::{ReferenceRegistry, StudentRepository, TeacherRepository},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CAMPUS_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// SQLite database file; `:memory:` for a throwaway store.
  pub store_path: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "127.0.0.1".to_string(),
      port:       8080,
      store_path: PathBuf::from("campus.db"),
    }
  }
}

// ─── Application state ───────────────────────────────────────────────────────

/// Everything a backend must implement to serve the API.
pub trait CampusStore:
  ReferenceRegistry + StudentRepository + TeacherRepository + 'static
{
}

impl<T> CampusStore for T where
  T: ReferenceRegistry + StudentRepository + TeacherRepository + 'static
{
}

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub store:    Arc<S>,
  pub students: StudentService<S>,
  pub teachers: TeacherService<S>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:    Arc::clone(&self.store),
      students: self.students.clone(),
      teachers: self.teachers.clone(),
    }
  }
}

impl<S: CampusStore> AppState<S> {
  /// Build the per-entity services over one shared store.
  pub fn new(store: Arc<S>) -> Self {
    Self {
      students: StudentService::new(Arc::clone(&store)),
      teachers: TeacherService::new(Arc::clone(&store)),
      store,
    }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the API router.
pub fn router<S: CampusStore>(state: AppState<S>) -> Router {
  Router::new()
    .route(
      "/student",
      get(students::get::<S>)
        .post(students::create::<S>)
        .put(students::update::<S>)
        .delete(students::delete::<S>),
    )
    .route(
      "/teacher",
      get(teachers::get::<S>)
        .post(teachers::create::<S>)
        .put(teachers::update::<S>)
        .delete(teachers::delete::<S>),
    )
    .route("/references/{kind}", get(references::get::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests;
