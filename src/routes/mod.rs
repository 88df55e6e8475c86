use actix_web::HttpResponse;
use actix_web::http::header;
use tera::{Context, Tera};

pub mod person;

/// Renders a template into an HTML response. Template failures are a
/// generic 500; the detail is logged, not exposed.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {template}: {err}");
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}

/// A 303 redirect, used after every successful mutation.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
