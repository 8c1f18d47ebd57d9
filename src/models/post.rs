use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
  pub id: Uuid,
  pub name: String,
  pub published: bool,
  pub created_at: DateTime<Utc>,
  pub created_by: Uuid,
}

/// A post joined with its author's email, as shown on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostWithAuthor {
  pub id: Uuid,
  pub name: String,
  pub published: bool,
  pub created_at: DateTime<Utc>,
  pub created_by: Uuid,
  pub author_email: String,
}
