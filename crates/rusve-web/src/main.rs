//! rusve-web server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), loads seed
//! users for the in-memory users service, and serves the router over HTTP.
//!
//! # Seed users
//!
//! `users_file` points at a JSON array such as:
//!
//! ```json
//! [{ "token": "dev-admin", "user": { "id": "1", "email": "a@b.c", "role": 2 } }]
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use rusve_core::memory::MemoryUserService;
use rusve_web::{SeedUser, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "rusve web server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .set_default("host", "0.0.0.0")?
    .set_default("port", 3000)?
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("RUSVE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let seeds = match &server_cfg.users_file {
    Some(path) => {
      let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read users file {path:?}"))?;
      serde_json::from_str::<Vec<SeedUser>>(&raw)
        .with_context(|| format!("failed to parse users file {path:?}"))?
    }
    None => Vec::new(),
  };

  let service = MemoryUserService::new(
    seeds.into_iter().map(|s| (s.token, s.user.into_output())),
  );
  if service.is_empty() {
    tracing::warn!("No seed users configured; every request to /me will be rejected");
  } else {
    tracing::info!("Loaded {} seed users", service.len());
  }

  let app = rusve_web::router(Arc::new(service));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
