//! Data access scoped to the current session's identity.
//!
//! `Store::for_session` is the enhanced-client factory: it binds a pool to
//! the caller's identity so every query runs under the row-level policy in
//! [`policy`]. A store is re-derived per request and never cached.

pub mod policy;
pub mod posts;
pub mod users;

use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::services::session_service::Session;

#[derive(Debug, Error)]
pub enum StoreError {
  /// A uniqueness constraint was violated. Surfaced as a dedicated variant
  /// instead of requiring callers to sniff driver error shapes.
  #[error("a row with this unique value already exists")]
  Conflict,

  /// The row does not exist, or the access policy hides it from the caller.
  #[error("row not found")]
  NotFound,

  /// The row is visible but the access policy forbids the operation.
  #[error("operation denied by access policy")]
  Denied,

  #[error(transparent)]
  Sqlx(#[from] sqlx::Error),
}

pub struct Store<'a> {
  pool: &'a PgPool,
  identity: Option<Uuid>,
}

impl<'a> Store<'a> {
  /// Produces a store scoped to the given session's identity (or to an
  /// anonymous caller when there is no session).
  pub fn for_session(pool: &'a PgPool, session: Option<&Session>) -> Self {
    Self {
      pool,
      identity: session.map(|s| s.user_id),
    }
  }

  pub(crate) fn pool(&self) -> &PgPool {
    self.pool
  }

  pub(crate) fn identity(&self) -> Option<Uuid> {
    self.identity
  }
}
