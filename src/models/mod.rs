pub mod post;
pub mod user;

pub use post::{Post, PostWithAuthor};
pub use user::User;
