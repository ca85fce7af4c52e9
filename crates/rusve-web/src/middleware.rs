//! Authentication middleware that populates [`Locals`].

use std::sync::Arc;

use axum::{
  extract::{Request, State},
  http::{HeaderMap, header},
  middleware::Next,
  response::Response,
};
use rusve_core::auth::UserService;

use crate::{error::Error, locals::Locals};

/// Cookie the web client keeps the session token in.
pub const TOKEN_COOKIE: &str = "token";

/// Read the session token from `Authorization: Bearer …`, falling back to
/// the `token` cookie.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
  let bearer = headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.trim().split_once(' '))
    .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
    .map(|(_, token)| token.trim())
    .filter(|t| !t.is_empty());
  if let Some(token) = bearer {
    return Some(token.to_owned());
  }

  headers
    .get_all(header::COOKIE)
    .iter()
    .filter_map(|v| v.to_str().ok())
    .flat_map(|v| v.split(';'))
    .filter_map(|pair| pair.trim().split_once('='))
    .find(|(name, value)| *name == TOKEN_COOKIE && !value.is_empty())
    .map(|(_, value)| value.to_owned())
}

/// Resolve the request's token through `service` and attach [`Locals`].
///
/// Use with [`axum::middleware::from_fn_with_state`].
pub async fn require_locals<U>(
  State(service): State<Arc<U>>,
  mut req: Request,
  next: Next,
) -> Result<Response, Error>
where
  U: UserService + 'static,
{
  let token = token_from_headers(req.headers()).ok_or(Error::Unauthenticated)?;

  let response = service
    .auth(&token)
    .await
    .map_err(|e| {
      tracing::error!("Failed to auth token: {e:?}");
      Error::Upstream(Box::new(e))
    })?
    .ok_or_else(|| {
      tracing::debug!("token rejected by users service");
      Error::Unauthenticated
    })?;

  if response.user.is_deleted() {
    tracing::error!(user_id = %response.user.id, "User is deleted");
    return Err(Error::Unauthenticated);
  }

  tracing::debug!(user_id = %response.user.id, role = %response.user.role, "authenticated");
  req.extensions_mut().insert(Locals {
    token: response.token,
    user:  response.user,
  });
  Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
  use axum::http::HeaderValue;

  use super::*;

  fn headers(pairs: &[(header::HeaderName, &'static str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (k, v) in pairs {
      map.append(k.clone(), HeaderValue::from_static(v));
    }
    map
  }

  #[test]
  fn bearer_token() {
    let h = headers(&[(header::AUTHORIZATION, "Bearer abc")]);
    assert_eq!(token_from_headers(&h).as_deref(), Some("abc"));
  }

  #[test]
  fn bearer_scheme_is_case_insensitive() {
    for value in ["bearer abc", "BEARER abc", "  Bearer   abc "] {
      let h = headers(&[(header::AUTHORIZATION, value)]);
      assert_eq!(token_from_headers(&h).as_deref(), Some("abc"), "{value}");
    }
  }

  #[test]
  fn bearer_wins_over_cookie() {
    let h = headers(&[
      (header::AUTHORIZATION, "Bearer abc"),
      (header::COOKIE, "token=xyz"),
    ]);
    assert_eq!(token_from_headers(&h).as_deref(), Some("abc"));
  }

  #[test]
  fn cookie_token() {
    let h = headers(&[(header::COOKIE, "theme=dark; token=xyz; lang=en")]);
    assert_eq!(token_from_headers(&h).as_deref(), Some("xyz"));
  }

  #[test]
  fn no_token() {
    assert_eq!(token_from_headers(&HeaderMap::new()), None);
    let h = headers(&[
      (header::AUTHORIZATION, "Basic dXNlcjpwYXNz"),
      (header::COOKIE, "token="),
    ]);
    assert_eq!(token_from_headers(&h), None);
  }
}
