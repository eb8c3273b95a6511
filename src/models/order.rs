use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, Order as DomainOrder, OrderStatus,
    UpdateOrder as DomainUpdateOrder,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub pharmacy_id: i32,
    pub medicine: String,
    pub quantity: i32,
    pub status: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub user_id: i32,
    pub pharmacy_id: i32,
    pub medicine: &'a str,
    pub quantity: i32,
    pub status: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::orders)]
pub struct UpdateOrder<'a> {
    pub status: &'a str,
}

impl From<Order> for DomainOrder {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            pharmacy_id: value.pharmacy_id,
            medicine: value.medicine,
            quantity: value.quantity,
            status: OrderStatus::from(value.status),
        }
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(value: &'a DomainNewOrder) -> Self {
        Self {
            user_id: value.user_id,
            pharmacy_id: value.pharmacy_id,
            medicine: value.medicine.as_str(),
            quantity: value.quantity,
            status: OrderStatus::PENDING,
        }
    }
}

impl<'a> From<&'a DomainUpdateOrder> for UpdateOrder<'a> {
    fn from(value: &'a DomainUpdateOrder) -> Self {
        Self {
            status: value.status.as_str(),
        }
    }
}
