//! Password hashing/verification and the credential "authorize" callback.

use crate::errors::AppError;
use crate::models::User;
use crate::store::Store;
use argon2::{
  password_hash::{
    rand_core::OsRng, // For generating random salts
    PasswordHash,
    PasswordHasher,
    PasswordVerifier,
    SaltString,
  },
  Argon2,
};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// The minimal identity returned by a successful credential check.
#[derive(Debug, Clone)]
pub struct AuthIdentity {
  pub id: Uuid,
  pub email: String,
}

/// Hashes a plain-text password using Argon2 with a random salt.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String, AppError> {
  if password.is_empty() {
    return Err(AppError::Validation("Password cannot be empty for hashing.".to_string()));
  }

  let salt = SaltString::generate(&mut OsRng);
  let argon2_hasher = Argon2::default();

  argon2_hasher
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| AppError::Internal(format!("Password hashing process failed: {}", e)))
}

/// Verifies a plain-text password against a stored Argon2 hash.
///
/// A mismatch is `Ok(false)`; only a malformed stored hash or an internal
/// argon2 failure is an error.
#[instrument(name = "auth_service::verify_password", skip_all, err(Display))]
pub fn verify_password(hashed_password_str: &str, provided_password: &str) -> Result<bool, AppError> {
  let parsed_hash = PasswordHash::new(hashed_password_str)
    .map_err(|e| AppError::Internal(format!("Invalid stored password hash format: {}", e)))?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => Ok(false),
    Err(e) => Err(AppError::Internal(format!("Password verification process failed: {}", e))),
  }
}

/// The credential-checking callback behind the signin action.
///
/// Missing credentials are a validation error; an unknown email or a failed
/// password comparison is `Ok(None)` (authentication failure, not an error).
#[instrument(name = "auth_service::authorize", skip(store, password), fields(email = %email))]
pub async fn authorize(store: &Store<'_>, email: &str, password: &str) -> Result<Option<AuthIdentity>, AppError> {
  if email.is_empty() {
    return Err(AppError::Validation("\"email\" is required in credentials".to_string()));
  }
  if password.is_empty() {
    return Err(AppError::Validation("\"password\" is required in credentials".to_string()));
  }

  let maybe_user = store.find_user_by_email(email).await?;
  identity_for(maybe_user, password)
}

/// Compares the provided password against the candidate user row, if any.
fn identity_for(maybe_user: Option<User>, password: &str) -> Result<Option<AuthIdentity>, AppError> {
  let Some(user) = maybe_user else {
    debug!("No user found for the provided email.");
    return Ok(None);
  };

  if verify_password(&user.password_hash, password)? {
    Ok(Some(AuthIdentity {
      id: user.id,
      email: user.email,
    }))
  } else {
    warn!(user_id = %user.id, "Password comparison failed.");
    Ok(None)
  }
}
