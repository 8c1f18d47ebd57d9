//! Typed form schemas for the mutation actions.
//!
//! Form fields arrive untyped; each schema deserializes them leniently and
//! `validate()` turns them into a checked input or a validation error, so a
//! missing field produces the action's error payload rather than a bare 400.

use serde::Deserialize;

use crate::errors::AppError;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Deserialize, Debug)]
pub struct SignupForm {
  pub email: Option<String>,
  pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SignupInput {
  pub email: String,
  pub password: String,
}

impl SignupForm {
  pub fn validate(self) -> Result<SignupInput, AppError> {
    let email = self.email.unwrap_or_default().trim().to_string();
    if email.is_empty() || !email.contains('@') {
      return Err(AppError::Validation("Valid email is required.".to_string()));
    }
    let password = self.password.unwrap_or_default();
    if password.len() < MIN_PASSWORD_LEN {
      return Err(AppError::Validation(format!(
        "Password must be at least {} characters long.",
        MIN_PASSWORD_LEN
      )));
    }
    Ok(SignupInput { email, password })
  }
}

#[derive(Deserialize, Debug)]
pub struct SigninForm {
  pub email: Option<String>,
  pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SigninInput {
  pub email: String,
  pub password: String,
}

impl SigninForm {
  pub fn validate(self) -> Result<SigninInput, AppError> {
    let email = self.email.unwrap_or_default().trim().to_string();
    if email.is_empty() {
      return Err(AppError::Validation("\"email\" is required in credentials".to_string()));
    }
    let password = self.password.unwrap_or_default();
    if password.is_empty() {
      return Err(AppError::Validation("\"password\" is required in credentials".to_string()));
    }
    Ok(SigninInput { email, password })
  }
}

#[derive(Deserialize, Debug)]
pub struct CreatePostForm {
  pub name: Option<String>,
}

impl CreatePostForm {
  pub fn validate(self) -> Result<String, AppError> {
    let name = self.name.unwrap_or_default().trim().to_string();
    if name.is_empty() {
      return Err(AppError::Validation("Post name is required.".to_string()));
    }
    Ok(name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn signup_accepts_a_plausible_email_and_password() {
    let input = SignupForm {
      email: Some("  new@example.com ".to_string()),
      password: Some("longenough".to_string()),
    }
    .validate()
    .unwrap();
    assert_eq!(input.email, "new@example.com");
    assert_eq!(input.password, "longenough");
  }

  #[test]
  fn signup_rejects_missing_or_malformed_email() {
    for email in [None, Some("".to_string()), Some("not-an-email".to_string())] {
      let result = SignupForm {
        email,
        password: Some("longenough".to_string()),
      }
      .validate();
      assert!(matches!(result, Err(AppError::Validation(_))));
    }
  }

  #[test]
  fn signup_rejects_short_passwords() {
    let result = SignupForm {
      email: Some("new@example.com".to_string()),
      password: Some("short".to_string()),
    }
    .validate();
    assert!(matches!(result, Err(AppError::Validation(_))));
  }

  #[test]
  fn signin_requires_both_fields() {
    let missing_email = SigninForm {
      email: None,
      password: Some("whatever".to_string()),
    }
    .validate();
    assert!(matches!(missing_email, Err(AppError::Validation(_))));

    let missing_password = SigninForm {
      email: Some("reader@example.com".to_string()),
      password: None,
    }
    .validate();
    assert!(matches!(missing_password, Err(AppError::Validation(_))));

    let ok = SigninForm {
      email: Some("reader@example.com".to_string()),
      password: Some("pw".to_string()),
    }
    .validate()
    .unwrap();
    assert_eq!(ok.email, "reader@example.com");
  }

  #[test]
  fn create_post_requires_a_non_empty_name() {
    for name in [None, Some("".to_string()), Some("   ".to_string())] {
      assert!(matches!(CreatePostForm { name }.validate(), Err(AppError::Validation(_))));
    }
    assert_eq!(
      CreatePostForm {
        name: Some(" First post ".to_string())
      }
      .validate()
      .unwrap(),
      "First post"
    );
  }
}
