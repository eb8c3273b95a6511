use serde::Deserialize;
use thiserror::Error;

use crate::domain::order::{
    DEFAULT_MEDICINE, DEFAULT_QUANTITY, NewOrder, OrderStatus, UpdateOrder,
};

/// Identifier used for the customer or pharmacy when the field is omitted.
const DEFAULT_PARTY_ID: i32 = 1;

/// Result type returned by the order form helpers.
pub type OrderFormResult<T> = Result<T, OrderFormError>;

/// Errors that can occur while processing order forms.
#[derive(Debug, Error)]
pub enum OrderFormError {
    /// A numeric field held something other than a whole number.
    #[error("{field} must be a whole number, got `{value}`")]
    NotANumber { field: &'static str, value: String },
    /// A numeric field does not fit the column.
    #[error("{field} is out of range")]
    OutOfRange { field: &'static str },
    /// Quantity was zero or negative.
    #[error("quantity must be at least 1, got {0}")]
    NonPositiveQuantity(i32),
    /// The status update did not name an order.
    #[error("order_id is required")]
    MissingOrderId,
}

/// A scalar that may arrive as a JSON number or as text from either encoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// Payload of the "place order" request, accepted form-encoded or as JSON.
/// `medicine` is free text and is stored exactly as sent.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceOrderForm {
    #[serde(default)]
    pub user_id: Option<FieldValue>,
    #[serde(default)]
    pub pharmacy_id: Option<FieldValue>,
    #[serde(default)]
    pub medicine: Option<String>,
    #[serde(default)]
    pub quantity: Option<FieldValue>,
}

impl PlaceOrderForm {
    /// Coerce the raw fields into a domain `NewOrder`, substituting defaults
    /// for anything omitted.
    pub fn into_new_order(self) -> OrderFormResult<NewOrder> {
        let user_id = coerce_integer("user_id", self.user_id, DEFAULT_PARTY_ID)?;
        let pharmacy_id = coerce_integer("pharmacy_id", self.pharmacy_id, DEFAULT_PARTY_ID)?;
        let quantity = coerce_integer("quantity", self.quantity, DEFAULT_QUANTITY)?;
        if quantity < 1 {
            return Err(OrderFormError::NonPositiveQuantity(quantity));
        }

        let medicine = self
            .medicine
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MEDICINE.to_string());

        Ok(NewOrder::new(user_id, pharmacy_id)
            .with_medicine(medicine)
            .with_quantity(quantity))
    }
}

/// Form payload of the vendor's "update order" action. Any status label is
/// accepted verbatim.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateOrderForm {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateOrderForm {
    /// Resolve the target order and the status patch. A blank status means
    /// `Preparing`.
    pub fn into_update(self) -> OrderFormResult<(i32, UpdateOrder)> {
        let raw_id = self
            .order_id
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(OrderFormError::MissingOrderId)?;
        let order_id = parse_i32("order_id", raw_id)?;

        let update = self
            .status
            .filter(|value| !value.trim().is_empty())
            .map(UpdateOrder::new)
            .unwrap_or_else(|| UpdateOrder::new(OrderStatus::preparing()));

        Ok((order_id, update))
    }
}

fn coerce_integer(
    field: &'static str,
    value: Option<FieldValue>,
    default: i32,
) -> OrderFormResult<i32> {
    match value {
        None => Ok(default),
        Some(FieldValue::Integer(number)) => {
            i32::try_from(number).map_err(|_| OrderFormError::OutOfRange { field })
        }
        Some(FieldValue::Text(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Ok(default)
            } else {
                parse_i32(field, trimmed)
            }
        }
    }
}

fn parse_i32(field: &'static str, raw: &str) -> OrderFormResult<i32> {
    match raw.parse::<i64>() {
        Ok(number) => i32::try_from(number).map_err(|_| OrderFormError::OutOfRange { field }),
        Err(_) => Err(OrderFormError::NotANumber {
            field,
            value: raw.to_string(),
        }),
    }
}
