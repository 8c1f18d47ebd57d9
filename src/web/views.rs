//! Server-side rendering. Templates are embedded at compile time so the
//! binary needs no template directory at runtime.

use actix_web::HttpResponse;
use tera::{Context, Tera};

use crate::errors::Result;
use crate::models::PostWithAuthor;
use crate::services::session_service::Session;

/// Builds the template set once at startup. The set is static, so a broken
/// template is a programming error and fails the process immediately.
pub fn build_templates() -> Tera {
  let mut tera = Tera::default();
  tera
    .add_raw_templates(vec![
      ("base.html", include_str!("../../templates/base.html")),
      ("home.html", include_str!("../../templates/home.html")),
      ("signup.html", include_str!("../../templates/signup.html")),
      ("signin.html", include_str!("../../templates/signin.html")),
    ])
    .expect("embedded templates are valid");
  tera
}

pub fn render_home(tera: &Tera, session: Option<&Session>, posts: &[PostWithAuthor]) -> Result<String> {
  let mut ctx = Context::new();
  ctx.insert("session_email", &session.map(|s| s.email.as_str()));
  ctx.insert("posts", posts);
  Ok(tera.render("home.html", &ctx)?)
}

pub fn render_signup(tera: &Tera) -> Result<String> {
  Ok(tera.render("signup.html", &Context::new())?)
}

pub fn render_signin(tera: &Tera) -> Result<String> {
  Ok(tera.render("signin.html", &Context::new())?)
}

pub fn html(body: String) -> HttpResponse {
  HttpResponse::Ok()
    .content_type("text/html; charset=utf-8")
    .body(body)
}
