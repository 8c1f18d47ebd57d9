use crate::services::session_service::SessionService;
use sqlx::PgPool;
use std::sync::Arc;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
  pub db_pool: PgPool,
  pub sessions: SessionService,
  pub templates: Arc<Tera>,
}
