//! Per-request locals: the authenticated token and user.
//!
//! [`crate::middleware::require_locals`] inserts a [`Locals`] into the request
//! extensions once authentication succeeds. Handlers take it as an extractor;
//! a handler that names `Locals` can never run without both fields.
//!
//! Both fields are mandatory:
//!
//! ```compile_fail
//! let _ = rusve_web::Locals { token: String::new() };
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};
use rusve_core::UserOutput;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locals {
  pub token: String,
  pub user:  UserOutput,
}

impl<S> FromRequestParts<S> for Locals
where
  S: Send + Sync,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    _state: &S,
  ) -> Result<Self, Self::Rejection> {
    parts
      .extensions
      .get::<Locals>()
      .cloned()
      .ok_or(Error::Unauthenticated)
  }
}

#[cfg(test)]
mod tests {
  use axum::{body::Body, http::Request};
  use rusve_core::UserRole;

  use super::*;

  async fn extract(req: Request<Body>) -> Result<Locals, Error> {
    let (mut parts, _) = req.into_parts();
    Locals::from_request_parts(&mut parts, &()).await
  }

  #[tokio::test]
  async fn present_locals_are_extracted() {
    let locals = Locals {
      token: "tok".into(),
      user:  UserOutput {
        role: UserRole::RoleAdmin,
        ..UserOutput::default()
      },
    };
    let mut req = Request::new(Body::empty());
    req.extensions_mut().insert(locals.clone());
    assert_eq!(extract(req).await.unwrap(), locals);
  }

  #[tokio::test]
  async fn missing_locals_are_rejected() {
    let req = Request::new(Body::empty());
    assert!(matches!(extract(req).await, Err(Error::Unauthenticated)));
  }
}
