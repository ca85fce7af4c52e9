//! The `UserService` trait — the contract with the upstream users service.
//!
//! The web layer depends on this abstraction, not on any concrete client.
//! Credential checks happen behind the trait; callers only see whether a
//! token resolved to a user.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::user::UserOutput;

/// Answer to an authentication call: the user the token belongs to and the
/// token the caller should use from now on (the service may rotate it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
  pub token: String,
  pub user:  UserOutput,
}

/// Abstraction over the upstream users service.
///
/// All methods return `Send` futures so the trait can be used behind axum
/// middleware on a multi-threaded runtime.
pub trait UserService: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Resolve `token` to a user.
  ///
  /// Returns `Ok(None)` if the token is unknown or expired, and `Err` only
  /// when the service itself could not answer.
  fn auth<'a>(
    &'a self,
    token: &'a str,
  ) -> impl Future<Output = Result<Option<AuthResponse>, Self::Error>> + Send + 'a;
}
