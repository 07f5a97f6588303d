//! SQLite backend for the campus registry.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod registry;
mod rows;
mod schema;
mod store;
mod students;
mod teachers;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
