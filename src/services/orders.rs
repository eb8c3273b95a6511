use crate::domain::order::Order;
use crate::forms::orders::{PlaceOrderForm, UpdateOrderForm};
use crate::repository::{OrderReader, OrderWriter};
use crate::services::{ServiceError, ServiceResult};

/// Places a new `Pending` order from the customer's form or JSON payload.
pub fn place_order<R>(repo: &R, form: PlaceOrderForm) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    let new_order = form
        .into_new_order()
        .map_err(|err| ServiceError::InvalidInput(err.to_string()))?;

    let order = repo.create_order(&new_order).map_err(ServiceError::from)?;
    log::info!(
        "Order {} placed by user {} at pharmacy {}",
        order.id,
        order.user_id,
        order.pharmacy_id
    );
    Ok(order)
}

/// Lists every order belonging to `user_id`.
pub fn list_user_orders<R>(repo: &R, user_id: i32) -> ServiceResult<Vec<Order>>
where
    R: OrderReader + ?Sized,
{
    repo.list_orders_by_user(user_id)
        .map_err(ServiceError::from)
}

/// Overwrites the status of an order and returns the number of rows changed.
///
/// Updating an order that does not exist changes nothing and still succeeds.
pub fn update_order_status<R>(repo: &R, form: UpdateOrderForm) -> ServiceResult<usize>
where
    R: OrderWriter + ?Sized,
{
    let (order_id, update) = form
        .into_update()
        .map_err(|err| ServiceError::InvalidInput(err.to_string()))?;

    let affected = repo
        .update_order(order_id, &update)
        .map_err(ServiceError::from)?;

    if affected == 0 {
        log::warn!("Status update for unknown order {order_id} ignored");
    } else {
        log::info!("Order {order_id} moved to {}", update.status);
    }

    Ok(affected)
}
