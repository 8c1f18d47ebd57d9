//! Signup, signin and signout actions.

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::services::auth_service;
use crate::state::AppState;
use crate::store::Store;
use crate::web::forms::{SigninForm, SignupForm};
use crate::web::see_other;

#[instrument(name = "handler::signup", skip(app_state, form))]
pub async fn signup_action(
  app_state: web::Data<AppState>,
  form: web::Form<SignupForm>,
) -> Result<HttpResponse, AppError> {
  let input = form.into_inner().validate()?;
  info!(email = %input.email, "Signup attempt.");

  let password_hash = auth_service::hash_password(&input.password)?;
  // Signup runs before any session exists.
  let store = Store::for_session(&app_state.db_pool, None);
  let user = store.create_user(&input.email, &password_hash).await?;

  info!(user_id = %user.id, "Signup successful, redirecting to signin.");
  Ok(see_other("/signin"))
}

#[instrument(name = "handler::signin", skip(app_state, form))]
pub async fn signin_action(
  app_state: web::Data<AppState>,
  form: web::Form<SigninForm>,
) -> Result<HttpResponse, AppError> {
  let input = form.into_inner().validate()?;
  info!(email = %input.email, "Signin attempt.");

  let store = Store::for_session(&app_state.db_pool, None);
  let identity = auth_service::authorize(&store, &input.email, &input.password).await?;

  let Some(identity) = identity else {
    warn!(email = %input.email, "Signin rejected: bad credentials.");
    return Err(AppError::Auth("Invalid email or password".to_string()));
  };

  let token = app_state.sessions.issue(&identity)?;
  info!(user_id = %identity.id, "Signin successful.");
  Ok(
    HttpResponse::SeeOther()
      .insert_header((header::LOCATION, "/"))
      .cookie(app_state.sessions.session_cookie(token))
      .finish(),
  )
}

#[instrument(name = "handler::signout", skip(app_state))]
pub async fn signout_action(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::SeeOther()
    .insert_header((header::LOCATION, "/signin"))
    .cookie(app_state.sessions.removal_cookie())
    .finish()
}
