use crate::db::{DbConnection, DbPool};
use crate::domain::cart::{CartItem, NewCartItem};
use crate::domain::learning_class::{LearningClass, NewLearningClass};
use crate::domain::order::{NewOrder, Order, UpdateOrder};
use crate::domain::webinar::{NewWebinar, Webinar};

pub mod cart;
pub mod errors;
pub mod learning_class;
pub mod order;
pub mod webinar;

#[cfg(test)]
pub mod mock;

use errors::RepositoryResult;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Check out a connection; it goes back to the pool when dropped.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over order records.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    /// Every order placed by `user_id`, oldest first. Empty when none match.
    fn list_orders_by_user(&self, user_id: i32) -> RepositoryResult<Vec<Order>>;
}

/// Write operations over order records.
pub trait OrderWriter {
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    /// Overwrite the status of `order_id` and return the number of rows touched.
    ///
    /// A missing order touches zero rows and is not an error.
    fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<usize>;
}

/// Read-only operations over webinar records.
pub trait WebinarReader {
    fn list_webinars(&self) -> RepositoryResult<Vec<Webinar>>;
}

/// Write operations over webinar records.
pub trait WebinarWriter {
    fn create_webinar(&self, new_webinar: &NewWebinar) -> RepositoryResult<Webinar>;
}

/// Read-only operations over learning class records.
pub trait LearningClassReader {
    fn list_learning_classes(&self) -> RepositoryResult<Vec<LearningClass>>;
}

/// Write operations over learning class records.
pub trait LearningClassWriter {
    fn create_learning_class(
        &self,
        new_class: &NewLearningClass,
    ) -> RepositoryResult<LearningClass>;
}

/// Read-only access to the storefront cart.
pub trait CartReader {
    /// Cart lines in the order they were first added.
    fn list_cart_items(&self) -> RepositoryResult<Vec<CartItem>>;
}

/// Write operations over the storefront cart.
pub trait CartWriter {
    /// Add one unit of `item.product`. A new line starts at quantity 1 with
    /// `item.price`; an existing line keeps its price.
    fn add_cart_item(&self, item: &NewCartItem) -> RepositoryResult<()>;
    /// Take one unit of `product` off the cart, dropping the line when it
    /// reaches zero. Returns `false` when the product was not in the cart.
    fn remove_cart_item(&self, product: &str) -> RepositoryResult<bool>;
}
