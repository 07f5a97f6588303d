//! [`SqliteStore`]: the SQLite implementation of the campus storage traits.

use std::path::Path;

use campus_core::store::Backend;
use rusqlite::{Connection, OptionalExtension as _, Row, TransactionBehavior};

use crate::{Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A campus store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. All calls
/// are serialised onto the connection's thread, and every write runs inside
/// one `IMMEDIATE` transaction, so a resolve-then-insert is never observed
/// half done.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, mostly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a read on the connection thread.
  pub(crate) async fn read<T, F>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    T: Send + 'static,
  {
    self.conn.call(move |conn| Ok(f(conn))).await?
  }

  /// Run `f` inside an immediate transaction, committing only if it succeeds.
  /// On error the transaction is dropped and rolled back.
  pub(crate) async fn write<T, F>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&rusqlite::Transaction<'_>) -> Result<T> + Send + 'static,
    T: Send + 'static,
  {
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let outcome = f(&tx);
        if outcome.is_ok() {
          tx.commit()?;
        }
        Ok(outcome)
      })
      .await?
  }
}

impl Backend for SqliteStore {
  type Error = crate::Error;
}

// ─── Query helpers ───────────────────────────────────────────────────────────

pub(crate) fn row_exists(conn: &Connection, table: &str, id: i64) -> Result<bool> {
  let found = conn
    .query_row(
      &format!("SELECT 1 FROM {table} WHERE id = ?1"),
      rusqlite::params![id],
      |_| Ok(()),
    )
    .optional()?;
  Ok(found.is_some())
}

pub(crate) fn query_one<T, P, F>(
  conn: &Connection,
  sql: &str,
  params: P,
  map: F,
) -> Result<Option<T>>
where
  P: rusqlite::Params,
  F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
{
  Ok(conn.query_row(sql, params, map).optional()?)
}

pub(crate) fn query_all<T, P, F>(
  conn: &Connection,
  sql: &str,
  params: P,
  map: F,
) -> Result<Vec<T>>
where
  P: rusqlite::Params,
  F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
  let mut stmt = conn.prepare(sql)?;
  let rows = stmt
    .query_map(params, map)?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}
