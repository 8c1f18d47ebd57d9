//! Page handlers: read the session, render HTML.

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::store::Store;
use crate::web::views;

#[instrument(name = "handler::home_page", skip(app_state, req))]
pub async fn home_page(app_state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, AppError> {
  let session = app_state.sessions.session_from_request(&req);

  // Anonymous visitors only get the signin/signup prompt; the post list is
  // rendered for signed-in callers, through their scoped store.
  let posts = match &session {
    Some(s) => {
      let store = Store::for_session(&app_state.db_pool, Some(s));
      store.list_posts().await?
    }
    None => Vec::new(),
  };

  info!(signed_in = session.is_some(), posts = posts.len(), "Rendering home page.");
  let body = views::render_home(&app_state.templates, session.as_ref(), &posts)?;
  Ok(views::html(body))
}

#[instrument(name = "handler::signup_page", skip(app_state))]
pub async fn signup_page(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  Ok(views::html(views::render_signup(&app_state.templates)?))
}

#[instrument(name = "handler::signin_page", skip(app_state))]
pub async fn signin_page(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  Ok(views::html(views::render_signin(&app_state.templates)?))
}

pub async fn health() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
