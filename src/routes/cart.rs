use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Serialize;

use crate::domain::cart::CartItem;
use crate::forms::cart::{AddToCartForm, RemoveFromCartForm};
use crate::repository::DieselRepository;
use crate::services::{ServiceError, ServiceResult, cart as cart_service};

/// JSON error body of the cart API.
#[derive(Debug, Serialize)]
pub struct CartError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

fn cart_response(result: ServiceResult<Vec<CartItem>>, failure: &str) -> HttpResponse {
    match result {
        Ok(cart) => HttpResponse::Ok().json(cart),
        Err(ServiceError::InvalidInput(message)) => HttpResponse::BadRequest().json(CartError {
            error: message,
            details: None,
        }),
        Err(err) => {
            log::error!("{failure}: {err}");
            HttpResponse::InternalServerError().json(CartError {
                error: failure.to_string(),
                details: Some(err.to_string()),
            })
        }
    }
}

#[get("/get-cart")]
pub async fn get_cart(repo: web::Data<DieselRepository>) -> impl Responder {
    cart_response(cart_service::load_cart(repo.get_ref()), "Failed to load cart")
}

#[post("/add-to-cart")]
pub async fn add_to_cart(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddToCartForm>,
) -> impl Responder {
    cart_response(
        cart_service::add_to_cart(repo.get_ref(), form),
        "Failed to add item to cart",
    )
}

#[post("/remove-from-cart")]
pub async fn remove_from_cart(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<RemoveFromCartForm>,
) -> impl Responder {
    cart_response(
        cart_service::remove_from_cart(repo.get_ref(), form),
        "Failed to remove item from cart",
    )
}
