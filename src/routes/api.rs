use actix_web::http::header;
use actix_web::{Either, HttpRequest, HttpResponse, Responder, get, post, web};

use crate::domain::chatbot::ChatMessage;
use crate::forms::orders::{PlaceOrderForm, UpdateOrderForm};
use crate::repository::DieselRepository;
use crate::routes::redirect;
use crate::services::{ServiceError, chatbot, orders as order_service};

#[get("/api/orders/{user_id}")]
/// Return the orders of `user_id` as a JSON array.
pub async fn api_orders(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let user_id = path.into_inner();

    match order_service::list_user_orders(repo.get_ref(), user_id) {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(err) => {
            log::error!("Failed to list orders of user {user_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/api/place_order")]
/// Place an order from a form-encoded or JSON body, then return to the
/// customer dashboard.
pub async fn place_order(
    repo: web::Data<DieselRepository>,
    payload: Either<web::Form<PlaceOrderForm>, web::Json<PlaceOrderForm>>,
) -> impl Responder {
    let form = match payload {
        Either::Left(web::Form(form)) => form,
        Either::Right(web::Json(form)) => form,
    };

    match order_service::place_order(repo.get_ref(), form) {
        Ok(_) => redirect("/user"),
        Err(ServiceError::InvalidInput(message)) => HttpResponse::BadRequest().body(message),
        Err(err) => {
            log::error!("Failed to place order: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/api/update_order")]
/// Change the status of an order, then return to the page the vendor came from.
pub async fn update_order(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<UpdateOrderForm>,
) -> impl Responder {
    match order_service::update_order_status(repo.get_ref(), form) {
        Ok(_) => {
            let back_to = req
                .headers()
                .get(header::REFERER)
                .and_then(|value| value.to_str().ok())
                .filter(|value| !value.is_empty())
                .unwrap_or("/vendor");
            redirect(back_to)
        }
        Err(ServiceError::InvalidInput(message)) => HttpResponse::BadRequest().body(message),
        Err(err) => {
            log::error!("Failed to update order status: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/chatbot")]
/// Answer a chatbot message with a canned reply.
pub async fn chatbot_reply(web::Json(message): web::Json<ChatMessage>) -> impl Responder {
    HttpResponse::Ok().json(chatbot::answer(&message))
}
