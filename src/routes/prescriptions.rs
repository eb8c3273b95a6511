use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Serialize;

use crate::config::ServerConfig;
use crate::forms::prescriptions::UploadPrescriptionForm;
use crate::services::ServiceError;
use crate::services::prescriptions::{UPLOADED_MESSAGE, store_prescription};

/// JSON body returned by the upload endpoint.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
}

impl UploadResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[get("/upload_prescription")]
/// The upload modal lives in the storefront page, so there is nothing to render.
pub async fn upload_prescription_page() -> impl Responder {
    HttpResponse::NoContent().finish()
}

#[post("/upload_prescription")]
pub async fn upload_prescription(
    config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<UploadPrescriptionForm>,
) -> impl Responder {
    match store_prescription(form.upload(), &config.prescriptions_dir) {
        Ok(_) => HttpResponse::Ok().json(UploadResponse {
            success: true,
            message: UPLOADED_MESSAGE.to_string(),
        }),
        Err(ServiceError::InvalidInput(message)) => {
            HttpResponse::BadRequest().json(UploadResponse::failure(message))
        }
        Err(err) => {
            log::error!("Failed to store prescription: {err}");
            HttpResponse::InternalServerError()
                .json(UploadResponse::failure("Could not save the prescription."))
        }
    }
}
