use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, web};
use tera::Tera;

use crate::forms::webinars::AddWebinarForm;
use crate::repository::DieselRepository;
use crate::routes::main::page_context;
use crate::routes::{redirect, render_template, render_template_with_status};
use crate::services::{ServiceError, webinars as webinar_service};

#[get("/webinars")]
pub async fn show_webinars(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match webinar_service::load_webinars(repo.get_ref()) {
        Ok(webinars) => {
            let mut context = page_context("webinars");
            context.insert("webinars", &webinars);
            render_template(&tera, "webinars/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list webinars: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/upload_webinar")]
pub async fn show_upload_webinar(tera: web::Data<Tera>) -> impl Responder {
    render_template(&tera, "webinars/upload.html", &page_context("webinars"))
}

#[post("/upload_webinar")]
pub async fn upload_webinar(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AddWebinarForm>,
) -> impl Responder {
    let today = chrono::Local::now().date_naive();

    match webinar_service::publish_webinar(repo.get_ref(), form, today) {
        Ok(webinar) => {
            log::info!("Webinar {} published by {}", webinar.id, webinar.uploaded_by);
            redirect("/webinars")
        }
        Err(ServiceError::InvalidInput(message)) => {
            let mut context = page_context("webinars");
            context.insert("error", &message);
            render_template_with_status(
                &tera,
                "webinars/upload.html",
                &context,
                StatusCode::BAD_REQUEST,
            )
        }
        Err(err) => {
            log::error!("Failed to publish webinar: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
