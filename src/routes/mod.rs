use actix_web::HttpResponse;
use actix_web::http::{StatusCode, header};
use tera::{Context, Tera};

pub mod api;
pub mod cart;
pub mod classes;
pub mod main;
pub mod prescriptions;
pub mod webinars;

/// `303 See Other` to `location`, used after every successful form post.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Render `template` with `context` as a `200 OK` HTML page.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, template, context, StatusCode::OK)
}

/// Render `template` with an explicit status code.
pub fn render_template_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
