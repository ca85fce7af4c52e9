//! `User` — an account record exchanged with the users service.
//!
//! Two shapes exist. [`User`] is the input shape: every field is optional,
//! which is what callers build for creation or partial updates.
//! [`UserOutput`] is what the upstream decoder hands back: every field is
//! present, absent values having been filled with their zero value.
//!
//! Any [`UserOutput`] widens into a [`User`] without loss.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, role::UserRole};

/// Value the users service stores in `deleted` for live accounts.
pub const NOT_DELETED: &str = "infinity";

// ─── Input shape ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id:                Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created:           Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub updated:           Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub deleted:           Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email:             Option<String>,
  /// Subject issued by the external identity provider.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sub:               Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub role:              Option<UserRole>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub subscription_id:   Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub subscription_end:  Option<String>,
}

impl User {
  /// Fill every absent field with its zero value, the way the upstream
  /// decoder does.
  pub fn into_output(self) -> UserOutput {
    UserOutput {
      id:               self.id.unwrap_or_default(),
      created:          self.created.unwrap_or_default(),
      updated:          self.updated.unwrap_or_default(),
      deleted:          self.deleted.unwrap_or_default(),
      email:            self.email.unwrap_or_default(),
      sub:              self.sub.unwrap_or_default(),
      role:             self.role.unwrap_or_default(),
      subscription_id:  self.subscription_id.unwrap_or_default(),
      subscription_end: self.subscription_end.unwrap_or_default(),
    }
  }
}

// ─── Output shape ────────────────────────────────────────────────────────────

/// A fully-populated user. Deserialization fails if any field is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOutput {
  pub id:               String,
  pub created:          String,
  pub updated:          String,
  /// Empty or [`NOT_DELETED`] for live accounts.
  pub deleted:          String,
  pub email:            String,
  pub sub:              String,
  pub role:             UserRole,
  /// Empty when the user has no subscription.
  pub subscription_id:  String,
  /// Empty when the user has no subscription.
  pub subscription_end: String,
}

/// An active subscription, present only when both identifying strings are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription<'a> {
  pub id:  &'a str,
  pub end: &'a str,
}

impl UserOutput {
  pub fn is_deleted(&self) -> bool { !is_unset_timestamp(&self.deleted) }

  pub fn subscription(&self) -> Option<Subscription<'_>> {
    if self.subscription_id.is_empty() || self.subscription_end.is_empty() {
      return None;
    }
    Some(Subscription {
      id:  &self.subscription_id,
      end: &self.subscription_end,
    })
  }

  pub fn created_at(&self) -> Result<Option<DateTime<Utc>>> {
    parse_timestamp(&self.created)
  }

  pub fn updated_at(&self) -> Result<Option<DateTime<Utc>>> {
    parse_timestamp(&self.updated)
  }

  pub fn deleted_at(&self) -> Result<Option<DateTime<Utc>>> {
    parse_timestamp(&self.deleted)
  }

  pub fn subscription_end_at(&self) -> Result<Option<DateTime<Utc>>> {
    parse_timestamp(&self.subscription_end)
  }
}

impl From<UserOutput> for User {
  fn from(u: UserOutput) -> Self {
    User {
      id:               Some(u.id),
      created:          Some(u.created),
      updated:          Some(u.updated),
      deleted:          Some(u.deleted),
      email:            Some(u.email),
      sub:              Some(u.sub),
      role:             Some(u.role),
      subscription_id:  Some(u.subscription_id),
      subscription_end: Some(u.subscription_end),
    }
  }
}

// ─── Timestamps ──────────────────────────────────────────────────────────────

fn is_unset_timestamp(s: &str) -> bool { s.is_empty() || s == NOT_DELETED }

/// Parse an RFC 3339 timestamp string. Empty and `infinity` mean "never".
pub fn parse_timestamp(s: &str) -> Result<Option<DateTime<Utc>>> {
  if is_unset_timestamp(s) {
    return Ok(None);
  }
  DateTime::parse_from_rfc3339(s)
    .map(|dt| Some(dt.with_timezone(&Utc)))
    .map_err(|source| Error::Timestamp {
      value: s.to_owned(),
      source,
    })
}
