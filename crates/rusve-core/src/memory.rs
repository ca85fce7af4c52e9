//! [`MemoryUserService`] — a fixed token table implementing [`UserService`].

use std::{collections::HashMap, convert::Infallible, sync::Arc};

use crate::{
  auth::{AuthResponse, UserService},
  user::UserOutput,
};

/// Resolves tokens against a table built up front. Useful for local
/// development and tests.
///
/// Cloning is cheap — the table is reference-counted.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserService {
  users: Arc<HashMap<String, UserOutput>>,
}

impl MemoryUserService {
  pub fn new(users: impl IntoIterator<Item = (String, UserOutput)>) -> Self {
    Self {
      users: Arc::new(users.into_iter().collect()),
    }
  }

  pub fn len(&self) -> usize { self.users.len() }

  pub fn is_empty(&self) -> bool { self.users.is_empty() }
}

impl UserService for MemoryUserService {
  type Error = Infallible;

  async fn auth(&self, token: &str) -> Result<Option<AuthResponse>, Infallible> {
    let Some(user) = self.users.get(token) else {
      tracing::debug!("unknown token");
      return Ok(None);
    };
    if user.is_deleted() {
      tracing::debug!(user_id = %user.id, "user is deleted");
      return Ok(None);
    }
    Ok(Some(AuthResponse {
      token: token.to_owned(),
      user:  user.clone(),
    }))
  }
}
