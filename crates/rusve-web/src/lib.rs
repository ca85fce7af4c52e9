//! axum integration for the rusve user types.
//!
//! Provides the per-request [`Locals`] extractor, the middleware that fills
//! it from any [`UserService`], and a small router exposing the current user.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(rusve_web::router(Arc::new(service)))
//! ```

pub mod error;
pub mod locals;
pub mod middleware;

pub use error::Error;
pub use locals::Locals;

use std::{path::PathBuf, sync::Arc};

use axum::{Json, Router, http::StatusCode, routing::get};
use rusve_core::{User, UserOutput, auth::UserService};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// JSON file of [`SeedUser`]s for the in-memory users service.
  pub users_file: Option<PathBuf>,
}

/// A token and the (possibly partial) user it resolves to.
#[derive(Debug, Deserialize, Clone)]
pub struct SeedUser {
  pub token: String,
  pub user:  User,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application router.
///
/// `GET /` is public; everything else sits behind
/// [`middleware::require_locals`].
pub fn router<U>(service: Arc<U>) -> Router
where
  U: UserService + 'static,
{
  let protected = Router::new()
    .route("/me", get(me))
    .route_layer(axum::middleware::from_fn_with_state(
      service,
      middleware::require_locals::<U>,
    ));

  Router::new()
    .route("/", get(root))
    .merge(protected)
    .layer(TraceLayer::new_for_http())
}

// ─── Handlers ─────────────────────────────────────────────────────────────────

/// `GET /` — liveness ping.
async fn root() -> (StatusCode, Json<&'static str>) {
  tracing::info!("Ping");
  (StatusCode::OK, Json("Hello, World!"))
}

/// `GET /me` — the authenticated user.
async fn me(locals: Locals) -> Json<UserOutput> { Json(locals.user) }

// ─── Integration tests ────────────────────────────────────────────────────────
