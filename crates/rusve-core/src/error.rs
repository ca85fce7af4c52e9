//! Error types for `rusve-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown user role code: {0}")]
  UnknownRoleCode(i32),

  #[error("unknown user role name: {0:?}")]
  UnknownRoleName(String),

  #[error("invalid timestamp {value:?}: {source}")]
  Timestamp {
    value:  String,
    #[source]
    source: chrono::ParseError,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
