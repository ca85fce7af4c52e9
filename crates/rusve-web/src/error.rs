//! Error types and axum `IntoResponse` implementation.

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unauthenticated")]
  Unauthenticated,

  #[error("users service error: {0}")]
  Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Unauthenticated => {
        let mut res = (
          StatusCode::UNAUTHORIZED,
          Json(json!({ "error": "Unauthenticated" })),
        )
          .into_response();
        res.headers_mut().insert(
          header::WWW_AUTHENTICATE,
          HeaderValue::from_static("Bearer realm=\"rusve\""),
        );
        res
      }
      // The upstream message is logged, not echoed to the client.
      Error::Upstream(_) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to authenticate" })),
      )
        .into_response(),
    }
  }
}
