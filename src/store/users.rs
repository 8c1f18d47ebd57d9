//! User rows: created at signup, read during authorization.

use tracing::{info, instrument, warn};

use crate::models::User;
use crate::store::{Store, StoreError};

impl Store<'_> {
  /// Inserts a new user. An email uniqueness violation is reported as
  /// [`StoreError::Conflict`] so callers never inspect driver internals.
  #[instrument(name = "store::create_user", skip(self, password_hash), fields(email = %email))]
  pub async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
    let inserted = sqlx::query_as::<_, User>(
      "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id, email, password_hash, created_at",
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(self.pool())
    .await;

    match inserted {
      Ok(user) => {
        info!(user_id = %user.id, "User created.");
        Ok(user)
      }
      Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
        warn!("Attempt to sign up with an existing email.");
        Err(StoreError::Conflict)
      }
      Err(e) => Err(StoreError::Sqlx(e)),
    }
  }

  /// Looks a user up by exact email match. Used by the authorize callback,
  /// which runs before any session exists, so this is not policy-gated.
  pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
    let user = sqlx::query_as::<_, User>(
      "SELECT id, email, password_hash, created_at FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(self.pool())
    .await?;
    Ok(user)
  }
}
