//! `UserRole` — the closed set of account roles.
//!
//! On the wire a role is written either by name (`"ROLE_ADMIN"`) or by its
//! numeric code (`2`). Both spellings decode to the same value; encoding
//! always emits the name.

use std::{fmt, str::FromStr};

use serde::{
  Deserialize, Deserializer, Serialize, Serializer,
  de::{self, Visitor},
};

use crate::Error;

/// Role attached to a user account. Ordered by numeric code.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[repr(i32)]
pub enum UserRole {
  /// Sentinel for "no role assigned".
  #[default]
  RoleUnset = 0,
  RoleUser  = 1,
  RoleAdmin = 2,
}

impl UserRole {
  /// Every role, in code order.
  pub const ALL: [UserRole; 3] =
    [UserRole::RoleUnset, UserRole::RoleUser, UserRole::RoleAdmin];

  pub fn code(self) -> i32 { self as i32 }

  pub fn as_str_name(self) -> &'static str {
    match self {
      UserRole::RoleUnset => "ROLE_UNSET",
      UserRole::RoleUser => "ROLE_USER",
      UserRole::RoleAdmin => "ROLE_ADMIN",
    }
  }

  pub fn from_code(code: i32) -> Option<Self> {
    match code {
      0 => Some(UserRole::RoleUnset),
      1 => Some(UserRole::RoleUser),
      2 => Some(UserRole::RoleAdmin),
      _ => None,
    }
  }

  pub fn from_str_name(name: &str) -> Option<Self> {
    match name {
      "ROLE_UNSET" => Some(UserRole::RoleUnset),
      "ROLE_USER" => Some(UserRole::RoleUser),
      "ROLE_ADMIN" => Some(UserRole::RoleAdmin),
      _ => None,
    }
  }
}

impl TryFrom<i32> for UserRole {
  type Error = Error;

  fn try_from(code: i32) -> Result<Self, Self::Error> {
    UserRole::from_code(code).ok_or(Error::UnknownRoleCode(code))
  }
}

impl From<UserRole> for i32 {
  fn from(role: UserRole) -> Self { role.code() }
}

impl FromStr for UserRole {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    UserRole::from_str_name(s).ok_or_else(|| Error::UnknownRoleName(s.to_owned()))
  }
}

impl fmt::Display for UserRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str_name())
  }
}

// ─── Serde ───────────────────────────────────────────────────────────────────

impl Serialize for UserRole {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str_name())
  }
}

struct UserRoleVisitor;

impl Visitor<'_> for UserRoleVisitor {
  type Value = UserRole;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("a role name (ROLE_UNSET, ROLE_USER, ROLE_ADMIN) or code 0..=2")
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<UserRole, E> {
    UserRole::from_str_name(v)
      .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
  }

  fn visit_i64<E: de::Error>(self, v: i64) -> Result<UserRole, E> {
    i32::try_from(v)
      .ok()
      .and_then(UserRole::from_code)
      .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
  }

  fn visit_u64<E: de::Error>(self, v: u64) -> Result<UserRole, E> {
    i32::try_from(v)
      .ok()
      .and_then(UserRole::from_code)
      .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
  }
}

impl<'de> Deserialize<'de> for UserRole {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_any(UserRoleVisitor)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn code_through_name_round_trip() {
    for code in 0..=2 {
      let name = UserRole::try_from(code).unwrap().as_str_name();
      let back = UserRole::from_str_name(name).unwrap();
      assert_eq!(back.code(), code);
    }
  }

  #[test]
  fn name_through_code_round_trip() {
    for name in ["ROLE_UNSET", "ROLE_USER", "ROLE_ADMIN"] {
      let code = name.parse::<UserRole>().unwrap().code();
      let back = UserRole::try_from(code).unwrap();
      assert_eq!(back.as_str_name(), name);
      assert_eq!(back.to_string(), name);
    }
  }

  #[test]
  fn name_and_code_agree() {
    assert_eq!(UserRole::from_str_name("ROLE_UNSET"), UserRole::from_code(0));
    assert_eq!(UserRole::from_str_name("ROLE_USER"), UserRole::from_code(1));
    assert_eq!(UserRole::from_str_name("ROLE_ADMIN"), UserRole::from_code(2));
  }

  #[test]
  fn closed_set_of_three() {
    assert_eq!(UserRole::ALL.len(), 3);
    assert!(matches!(UserRole::try_from(3), Err(Error::UnknownRoleCode(3))));
    assert!(matches!(UserRole::try_from(-1), Err(Error::UnknownRoleCode(-1))));
    assert!(matches!(
      "ROLE_OWNER".parse::<UserRole>(),
      Err(Error::UnknownRoleName(_))
    ));
    // Names are case-sensitive on the wire.
    assert!(UserRole::from_str_name("role_admin").is_none());
  }

  #[test]
  fn default_is_unset_and_ordering_follows_code() {
    assert_eq!(UserRole::default(), UserRole::RoleUnset);
    assert!(UserRole::RoleUnset < UserRole::RoleUser);
    assert!(UserRole::RoleUser < UserRole::RoleAdmin);
    let mut sorted = UserRole::ALL;
    sorted.sort();
    assert_eq!(sorted, UserRole::ALL);
  }

  #[test]
  fn name_and_code_decode_identically() {
    let by_name: UserRole = serde_json::from_str("\"ROLE_ADMIN\"").unwrap();
    let by_code: UserRole = serde_json::from_str("2").unwrap();
    assert_eq!(by_name, by_code);
    assert_eq!(by_name, UserRole::RoleAdmin);
  }

  #[test]
  fn serializes_as_name() {
    let json = serde_json::to_string(&UserRole::RoleUser).unwrap();
    assert_eq!(json, "\"ROLE_USER\"");
  }

  #[test]
  fn rejects_unknown_wire_values() {
    assert!(serde_json::from_str::<UserRole>("3").is_err());
    assert!(serde_json::from_str::<UserRole>("-1").is_err());
    assert!(serde_json::from_str::<UserRole>("\"ROLE_ROOT\"").is_err());
    assert!(serde_json::from_str::<UserRole>("1.0").is_err());
  }
}
