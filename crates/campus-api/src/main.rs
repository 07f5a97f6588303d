//! campus server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), layers `CAMPUS_*`
//! environment variables on top, opens the SQLite store, and serves the JSON
//! API over HTTP.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use campus_api::{AppState, ServerConfig};
use campus_store_sqlite::SqliteStore;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Campus student/teacher registry server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Override `store_path` from the configuration.
  #[arg(long)]
  store: Option<PathBuf>,
}

fn init_tracing() {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// File first, then `CAMPUS_*` variables; a missing file is not an error.
fn load_config(path: &Path) -> anyhow::Result<ServerConfig> {
  config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("CAMPUS").try_parsing(true))
    .build()
    .with_context(|| format!("failed to read configuration from {path:?}"))?
    .try_deserialize()
    .context("invalid server configuration")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  init_tracing();

  let cli = Cli::parse();
  let mut cfg = load_config(&cli.config)?;
  if let Some(store) = cli.store {
    cfg.store_path = store;
  }

  let store = SqliteStore::open(&cfg.store_path)
    .await
    .with_context(|| format!("cannot open campus store {:?}", cfg.store_path))?;
  tracing::info!(path = ?cfg.store_path, "store ready");

  let app = campus_api::router(AppState::new(Arc::new(store)));

  let listener = TcpListener::bind((cfg.host.as_str(), cfg.port))
    .await
    .with_context(|| format!("cannot bind {}:{}", cfg.host, cfg.port))?;
  tracing::info!(addr = %listener.local_addr()?, "serving campus api");

  axum::serve(listener, app).await.context("server exited with an error")
}
