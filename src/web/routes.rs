use actix_web::web;

use crate::web::handlers::{auth, pages, posts};

// Called from `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    // Health Check Route
    .route("/health", web::get().to(pages::health))
    // Pages
    .route("/", web::get().to(pages::home_page))
    .route("/signup", web::get().to(pages::signup_page))
    .route("/signin", web::get().to(pages::signin_page))
    // Authentication actions
    .route("/signup", web::post().to(auth::signup_action))
    .route("/signin", web::post().to(auth::signin_action))
    .route("/signout", web::post().to(auth::signout_action))
    // Post mutation actions
    .service(
      web::scope("/posts")
        .route("", web::post().to(posts::create_post_action))
        .route("/{post_id}/toggle", web::post().to(posts::toggle_published_action))
        .route("/{post_id}/delete", web::post().to(posts::delete_post_action)),
    );
}
