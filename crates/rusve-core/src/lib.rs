//! Core types for the rusve user domain.
//!
//! These mirror the `User` message and `UserRole` enumeration of the upstream
//! `users.proto` schema. The crate is free of HTTP dependencies; the web layer
//! (`rusve-web`) depends on it, not the other way round.

pub mod auth;
pub mod error;
pub mod memory;
pub mod role;
pub mod user;

pub use error::{Error, Result};
pub use role::UserRole;
pub use user::{Subscription, User, UserOutput};
