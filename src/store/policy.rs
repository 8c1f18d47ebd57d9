//! Row-level access policy, evaluated per operation against the requesting
//! identity.
//!
//! The listing query in [`super::posts`] mirrors `can_read_post` in SQL;
//! keep the two in sync when the policy changes.

use uuid::Uuid;

use crate::models::Post;

/// Published posts are readable by anyone; drafts only by their owner.
pub fn can_read_post(identity: Option<Uuid>, post: &Post) -> bool {
  post.published || identity == Some(post.created_by)
}

/// Toggling and deleting are owner-only.
pub fn can_write_post(identity: Option<Uuid>, post: &Post) -> bool {
  identity == Some(post.created_by)
}

/// Creating a post requires a signed-in caller.
pub fn can_create_post(identity: Option<Uuid>) -> bool {
  identity.is_some()
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  fn post(published: bool, owner: Uuid) -> Post {
    Post {
      id: Uuid::new_v4(),
      name: "a post".to_string(),
      published,
      created_at: Utc::now(),
      created_by: owner,
    }
  }

  #[test]
  fn published_posts_are_readable_by_everyone() {
    let owner = Uuid::new_v4();
    let p = post(true, owner);
    assert!(can_read_post(None, &p));
    assert!(can_read_post(Some(Uuid::new_v4()), &p));
    assert!(can_read_post(Some(owner), &p));
  }

  #[test]
  fn drafts_are_readable_only_by_their_owner() {
    let owner = Uuid::new_v4();
    let p = post(false, owner);
    assert!(can_read_post(Some(owner), &p));
    assert!(!can_read_post(None, &p));
    assert!(!can_read_post(Some(Uuid::new_v4()), &p));
  }

  #[test]
  fn writes_are_owner_only_regardless_of_publication() {
    let owner = Uuid::new_v4();
    for published in [true, false] {
      let p = post(published, owner);
      assert!(can_write_post(Some(owner), &p));
      assert!(!can_write_post(Some(Uuid::new_v4()), &p));
      assert!(!can_write_post(None, &p));
    }
  }

  #[test]
  fn creation_requires_a_session() {
    assert!(can_create_post(Some(Uuid::new_v4())));
    assert!(!can_create_post(None));
  }
}
