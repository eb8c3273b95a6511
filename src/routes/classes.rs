use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, web};
use tera::Tera;

use crate::forms::learning_classes::AddLearningClassForm;
use crate::repository::DieselRepository;
use crate::routes::main::page_context;
use crate::routes::{redirect, render_template, render_template_with_status};
use crate::services::{ServiceError, learning_classes as class_service};

#[get("/classes")]
pub async fn show_classes(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match class_service::load_classes(repo.get_ref()) {
        Ok(classes) => {
            let mut context = page_context("classes");
            context.insert("classes", &classes);
            render_template(&tera, "classes/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list classes: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/upload_class")]
pub async fn show_upload_class(tera: web::Data<Tera>) -> impl Responder {
    render_template(&tera, "classes/upload.html", &page_context("classes"))
}

#[post("/upload_class")]
pub async fn upload_class(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AddLearningClassForm>,
) -> impl Responder {
    match class_service::schedule_class(repo.get_ref(), form) {
        Ok(class) => {
            log::info!("Class {} scheduled for {} {}", class.id, class.date, class.time);
            redirect("/classes")
        }
        Err(ServiceError::InvalidInput(message)) => {
            let mut context = page_context("classes");
            context.insert("error", &message);
            render_template_with_status(
                &tera,
                "classes/upload.html",
                &context,
                StatusCode::BAD_REQUEST,
            )
        }
        Err(err) => {
            log::error!("Failed to schedule class: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
