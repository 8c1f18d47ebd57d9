//! JWT-backed sessions carried in an HTTP cookie.
//!
//! Token validity and expiry are fully owned by the JWT library; the rest of
//! the app only ever sees `Option<Session>`.

use actix_web::cookie::{time, Cookie, SameSite};
use actix_web::HttpRequest;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::auth_service::AuthIdentity;

pub const SESSION_COOKIE: &str = "miniblog_session";

/// The current caller's identity, as recovered from a valid session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
  pub user_id: Uuid,
  pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
  sub: String,
  email: String,
  iat: i64,
  exp: i64,
}

#[derive(Clone)]
pub struct SessionService {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  validation: Validation,
  ttl: Duration,
}

impl SessionService {
  pub fn new(secret: &str, ttl_hours: i64) -> Self {
    Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(secret.as_bytes()),
      validation: Validation::default(),
      ttl: Duration::hours(ttl_hours),
    }
  }

  /// Issues a signed session token for the authenticated identity.
  #[instrument(name = "session_service::issue", skip(self, identity), fields(user_id = %identity.id))]
  pub fn issue(&self, identity: &AuthIdentity) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
      sub: identity.id.to_string(),
      email: identity.email.clone(),
      iat: now.timestamp(),
      exp: (now + self.ttl).timestamp(),
    };
    encode(&Header::default(), &claims, &self.encoding_key)
      .map_err(|e| AppError::Internal(format!("Session token signing failed: {}", e)))
  }

  /// Validates a session token. Invalid, tampered or expired tokens are
  /// session absence, never an error.
  pub fn verify(&self, token: &str) -> Option<Session> {
    let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
      .map_err(|e| debug!(reason = %e, "Session token rejected."))
      .ok()?;
    let user_id = Uuid::parse_str(&data.claims.sub).ok()?;
    Some(Session {
      user_id,
      email: data.claims.email,
    })
  }

  /// The session accessor: the current session, or `None` when the request
  /// carries no (valid) session cookie.
  pub fn session_from_request(&self, req: &HttpRequest) -> Option<Session> {
    let cookie = req.cookie(SESSION_COOKIE)?;
    self.verify(cookie.value())
  }

  /// Builds the cookie that carries a freshly issued session token.
  pub fn session_cookie(&self, token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
      .path("/")
      .http_only(true)
      .same_site(SameSite::Lax)
      .max_age(time::Duration::seconds(self.ttl.num_seconds()))
      .finish()
  }

  /// Builds the removal cookie used by the signout action.
  pub fn removal_cookie(&self) -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
      .path("/")
      .http_only(true)
      .same_site(SameSite::Lax)
      .finish();
    cookie.make_removal();
    cookie
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const SECRET: &str = "0123456789abcdef0123456789abcdef";

  fn identity() -> AuthIdentity {
    AuthIdentity {
      id: Uuid::new_v4(),
      email: "writer@example.com".to_string(),
    }
  }

  #[test]
  fn issue_then_verify_recovers_the_identity() {
    let sessions = SessionService::new(SECRET, 24);
    let identity = identity();
    let token = sessions.issue(&identity).unwrap();

    let session = sessions.verify(&token).expect("token should be valid");
    assert_eq!(session.user_id, identity.id);
    assert_eq!(session.email, identity.email);
  }

  #[test]
  fn tampered_token_is_rejected() {
    let sessions = SessionService::new(SECRET, 24);
    let mut token = sessions.issue(&identity()).unwrap();
    token.push('x');
    assert!(sessions.verify(&token).is_none());
  }

  #[test]
  fn token_signed_with_another_secret_is_rejected() {
    let issuer = SessionService::new("another-secret-another-secret-ab", 24);
    let verifier = SessionService::new(SECRET, 24);
    let token = issuer.issue(&identity()).unwrap();
    assert!(verifier.verify(&token).is_none());
  }

  #[test]
  fn expired_token_is_session_absence() {
    // A negative TTL puts `exp` well past the validator's leeway.
    let sessions = SessionService::new(SECRET, -2);
    let token = sessions.issue(&identity()).unwrap();
    assert!(sessions.verify(&token).is_none());
  }

  #[test]
  fn session_cookie_is_http_only_and_scoped_to_root() {
    let sessions = SessionService::new(SECRET, 24);
    let cookie = sessions.session_cookie("token".to_string());
    assert_eq!(cookie.name(), SESSION_COOKIE);
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
  }

  #[test]
  fn removal_cookie_clears_the_session() {
    let sessions = SessionService::new(SECRET, 24);
    let cookie = sessions.removal_cookie();
    assert_eq!(cookie.name(), SESSION_COOKIE);
    assert!(cookie.value().is_empty());
  }
}
