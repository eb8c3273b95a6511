use std::fmt;

use serde::{Deserialize, Serialize};

/// Medicine name recorded when the customer leaves the field empty.
pub const DEFAULT_MEDICINE: &str = "DemoMed";
/// Quantity recorded when the customer leaves the field empty.
pub const DEFAULT_QUANTITY: i32 = 1;

/// Free-form lifecycle label of an order.
///
/// Any string is accepted and any label may follow any other; the store keeps
/// only the most recent value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    /// Label every order starts with.
    pub const PENDING: &'static str = "Pending";
    /// Label applied by a status update that does not name one.
    pub const PREPARING: &'static str = "Preparing";

    /// Wrap an arbitrary label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The initial `Pending` status.
    pub fn pending() -> Self {
        Self::new(Self::PENDING)
    }

    /// The default `Preparing` status used by updates.
    pub fn preparing() -> Self {
        Self::new(Self::PREPARING)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::pending()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A customer's request for a quantity of medicine from a pharmacy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier assigned by the store.
    pub id: i32,
    /// Ordering customer. Not checked against the users table.
    pub user_id: i32,
    /// Fulfilling pharmacy. Not checked against the pharmacies table.
    pub pharmacy_id: i32,
    /// Free-text medicine name.
    pub medicine: String,
    /// Number of units requested.
    pub quantity: i32,
    /// Current lifecycle label.
    pub status: OrderStatus,
}

/// Payload required to insert a new order. New orders are always `Pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: i32,
    pub pharmacy_id: i32,
    pub medicine: String,
    pub quantity: i32,
}

impl NewOrder {
    /// Build an order for `DemoMed` x1 between the given customer and pharmacy.
    pub fn new(user_id: i32, pharmacy_id: i32) -> Self {
        Self {
            user_id,
            pharmacy_id,
            medicine: DEFAULT_MEDICINE.to_string(),
            quantity: DEFAULT_QUANTITY,
        }
    }

    /// Set the medicine name.
    pub fn with_medicine(mut self, medicine: impl Into<String>) -> Self {
        self.medicine = medicine.into();
        self
    }

    /// Set the requested quantity.
    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// Patch applied by the status update operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOrder {
    pub status: OrderStatus,
}

impl UpdateOrder {
    pub fn new(status: impl Into<OrderStatus>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

impl Default for UpdateOrder {
    fn default() -> Self {
        Self::new(OrderStatus::preparing())
    }
}
