//! Post mutation actions: create, toggle publication, delete.
//!
//! Each action validates its input, requires a session, performs exactly one
//! store operation, and refreshes the home page via a 303 redirect.

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::session_service::Session;
use crate::state::AppState;
use crate::store::Store;
use crate::web::forms::CreatePostForm;
use crate::web::see_other;

fn require_session(app_state: &AppState, req: &HttpRequest) -> Result<Session, AppError> {
  app_state
    .sessions
    .session_from_request(req)
    .ok_or_else(|| AppError::Auth("not logged in".to_string()))
}

#[instrument(name = "handler::create_post", skip(app_state, req, form))]
pub async fn create_post_action(
  app_state: web::Data<AppState>,
  req: HttpRequest,
  form: web::Form<CreatePostForm>,
) -> Result<HttpResponse, AppError> {
  let session = require_session(&app_state, &req)?;
  let name = form.into_inner().validate()?;

  let store = Store::for_session(&app_state.db_pool, Some(&session));
  let post = store.create_post(&name).await?;

  info!(post_id = %post.id, user_id = %session.user_id, "Post created.");
  Ok(see_other("/"))
}

#[instrument(name = "handler::toggle_published", skip(app_state, req, path), fields(post_id = %path.as_ref()))]
pub async fn toggle_published_action(
  app_state: web::Data<AppState>,
  req: HttpRequest,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let session = require_session(&app_state, &req)?;
  let post_id = path.into_inner();

  let store = Store::for_session(&app_state.db_pool, Some(&session));
  let post = store.toggle_published(post_id).await?;

  info!(post_id = %post.id, published = post.published, "Post publication toggled.");
  Ok(see_other("/"))
}

#[instrument(name = "handler::delete_post", skip(app_state, req, path), fields(post_id = %path.as_ref()))]
pub async fn delete_post_action(
  app_state: web::Data<AppState>,
  req: HttpRequest,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let session = require_session(&app_state, &req)?;
  let post_id = path.into_inner();

  let store = Store::for_session(&app_state.db_pool, Some(&session));
  store.delete_post(post_id).await?;

  info!(post_id = %post_id, "Post deleted.");
  Ok(see_other("/"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::services::session_service::SessionService;
  use crate::web::views;
  use actix_web::test::TestRequest;
  use sqlx::PgPool;
  use std::sync::Arc;

  fn app_state() -> AppState {
    AppState {
      db_pool: PgPool::connect_lazy("postgres://nobody@localhost:1/unreachable").expect("lazy pool"),
      sessions: SessionService::new("0123456789abcdef0123456789abcdef", 24),
      templates: Arc::new(views::build_templates()),
    }
  }

  #[tokio::test]
  async fn missing_session_yields_the_not_logged_in_error() {
    let state = app_state();
    let req = TestRequest::default().to_http_request();
    let err = require_session(&state, &req).unwrap_err();
    assert!(matches!(err, AppError::Auth(ref m) if m == "not logged in"));
  }

  #[tokio::test]
  async fn garbage_session_cookie_counts_as_no_session() {
    let state = app_state();
    let req = TestRequest::default()
      .cookie(actix_web::cookie::Cookie::new(
        crate::services::session_service::SESSION_COOKIE,
        "not-a-jwt",
      ))
      .to_http_request();
    assert!(require_session(&state, &req).is_err());
  }
}
