//! Post rows. Every operation here is policy-checked against the store's
//! identity before it touches the database row.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::models::{Post, PostWithAuthor};
use crate::store::{policy, Store, StoreError};

impl Store<'_> {
  /// Lists the posts visible to the caller, newest first, with author email.
  /// The WHERE clause is the SQL form of [`policy::can_read_post`].
  #[instrument(name = "store::list_posts", skip(self))]
  pub async fn list_posts(&self) -> Result<Vec<PostWithAuthor>, StoreError> {
    let posts = sqlx::query_as::<_, PostWithAuthor>(
      "SELECT p.id, p.name, p.published, p.created_at, p.created_by, u.email AS author_email
       FROM posts p
       JOIN users u ON u.id = p.created_by
       WHERE p.published = TRUE OR p.created_by = $1
       ORDER BY p.created_at DESC",
    )
    .bind(self.identity())
    .fetch_all(self.pool())
    .await?;
    Ok(posts)
  }

  /// Creates a post owned by the caller. New posts start unpublished.
  #[instrument(name = "store::create_post", skip(self), fields(name = %name))]
  pub async fn create_post(&self, name: &str) -> Result<Post, StoreError> {
    if !policy::can_create_post(self.identity()) {
      return Err(StoreError::Denied);
    }
    // can_create_post established the identity is present.
    let owner = self.identity().ok_or(StoreError::Denied)?;

    let post = sqlx::query_as::<_, Post>(
      "INSERT INTO posts (name, created_by) VALUES ($1, $2) RETURNING id, name, published, created_at, created_by",
    )
    .bind(name)
    .bind(owner)
    .fetch_one(self.pool())
    .await?;

    info!(post_id = %post.id, "Post created.");
    Ok(post)
  }

  /// Flips `published` on the given post exactly once.
  ///
  /// A missing row and a row the policy hides from the caller are both
  /// `NotFound`; a visible row owned by someone else is `Denied`.
  #[instrument(name = "store::toggle_published", skip(self), fields(post_id = %id))]
  pub async fn toggle_published(&self, id: Uuid) -> Result<Post, StoreError> {
    let current = self.find_visible_post(id).await?;
    if !policy::can_write_post(self.identity(), &current) {
      warn!("Toggle denied by access policy.");
      return Err(StoreError::Denied);
    }

    let updated = sqlx::query_as::<_, Post>(
      "UPDATE posts SET published = NOT published WHERE id = $1 RETURNING id, name, published, created_at, created_by",
    )
    .bind(id)
    .fetch_one(self.pool())
    .await?;

    info!(published = updated.published, "Post publication toggled.");
    Ok(updated)
  }

  /// Deletes the given post. Same visibility/ownership rules as toggling.
  #[instrument(name = "store::delete_post", skip(self), fields(post_id = %id))]
  pub async fn delete_post(&self, id: Uuid) -> Result<(), StoreError> {
    let current = self.find_visible_post(id).await?;
    if !policy::can_write_post(self.identity(), &current) {
      warn!("Delete denied by access policy.");
      return Err(StoreError::Denied);
    }

    sqlx::query("DELETE FROM posts WHERE id = $1")
      .bind(id)
      .execute(self.pool())
      .await?;

    info!("Post deleted.");
    Ok(())
  }

  /// Fetches a post if it exists and the caller may read it.
  async fn find_visible_post(&self, id: Uuid) -> Result<Post, StoreError> {
    let post = sqlx::query_as::<_, Post>(
      "SELECT id, name, published, created_at, created_by FROM posts WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(self.pool())
    .await?;

    match post {
      Some(p) if policy::can_read_post(self.identity(), &p) => Ok(p),
      Some(_) => {
        warn!("Post exists but is hidden from the caller.");
        Err(StoreError::NotFound)
      }
      None => Err(StoreError::NotFound),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use sqlx::PgPool;

  // A lazy pool never opens a connection until a query runs, so these tests
  // prove the policy short-circuits before anything reaches the database.
  fn unreachable_pool() -> PgPool {
    PgPool::connect_lazy("postgres://nobody@localhost:1/unreachable").expect("lazy pool")
  }

  #[tokio::test]
  async fn anonymous_create_post_is_denied_before_any_query() {
    let pool = unreachable_pool();
    let store = Store::for_session(&pool, None);
    let result = store.create_post("First post").await;
    assert!(matches!(result, Err(StoreError::Denied)));
  }
}
