//! Core types and trait definitions for the campus registry.
//!
//! This crate is deliberately free of HTTP and database dependencies. It
//! defines the student/teacher domain, the reference data they point at, the
//! storage traits backends implement, and the query services the HTTP layer
//! calls into.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod reference;
pub mod selector;
pub mod service;
pub mod store;
pub mod student;
pub mod teacher;

pub use error::{Error, Result};
