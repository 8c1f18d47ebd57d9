pub mod forms;
pub mod handlers;
pub mod routes;
pub mod views;

use actix_web::http::header;
use actix_web::HttpResponse;

/// The post-mutation refresh: a 303 back to the affected page so the browser
/// re-renders it with fresh data.
pub fn see_other(location: &str) -> HttpResponse {
  HttpResponse::SeeOther()
    .insert_header((header::LOCATION, location))
    .finish()
}
