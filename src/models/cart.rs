use diesel::prelude::*;

use crate::domain::cart::{CartItem as DomainCartItem, NewCartItem as DomainNewCartItem};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::cart_items)]
pub struct CartItem {
    pub id: i32,
    pub product: String,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::cart_items)]
pub struct NewCartItem<'a> {
    pub product: &'a str,
    pub price: f64,
    pub quantity: i32,
}

impl From<CartItem> for DomainCartItem {
    fn from(value: CartItem) -> Self {
        Self {
            id: value.id,
            product: value.product,
            price: value.price,
            quantity: value.quantity,
        }
    }
}

impl<'a> From<&'a DomainNewCartItem> for NewCartItem<'a> {
    fn from(value: &'a DomainNewCartItem) -> Self {
        Self {
            product: value.product.as_str(),
            price: value.price,
            quantity: 1,
        }
    }
}
