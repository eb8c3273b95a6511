use mockall::mock;

use super::errors::RepositoryResult;
use super::{
    CartReader, CartWriter, LearningClassReader, LearningClassWriter, OrderReader, OrderWriter,
    WebinarReader, WebinarWriter,
};
use crate::domain::{
    cart::{CartItem, NewCartItem},
    learning_class::{LearningClass, NewLearningClass},
    order::{NewOrder, Order, UpdateOrder},
    webinar::{NewWebinar, Webinar},
};

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders_by_user(&self, user_id: i32) -> RepositoryResult<Vec<Order>>;
    }
}

mock! {
    pub OrderWriter {}

    impl OrderWriter for OrderWriter {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<usize>;
    }
}

mock! {
    pub WebinarReader {}

    impl WebinarReader for WebinarReader {
        fn list_webinars(&self) -> RepositoryResult<Vec<Webinar>>;
    }
}

mock! {
    pub WebinarWriter {}

    impl WebinarWriter for WebinarWriter {
        fn create_webinar(&self, new_webinar: &NewWebinar) -> RepositoryResult<Webinar>;
    }
}

mock! {
    pub LearningClassReader {}

    impl LearningClassReader for LearningClassReader {
        fn list_learning_classes(&self) -> RepositoryResult<Vec<LearningClass>>;
    }
}

mock! {
    pub LearningClassWriter {}

    impl LearningClassWriter for LearningClassWriter {
        fn create_learning_class(&self, new_class: &NewLearningClass) -> RepositoryResult<LearningClass>;
    }
}

mock! {
    pub Cart {}

    impl CartReader for Cart {
        fn list_cart_items(&self) -> RepositoryResult<Vec<CartItem>>;
    }

    impl CartWriter for Cart {
        fn add_cart_item(&self, item: &NewCartItem) -> RepositoryResult<()>;
        fn remove_cart_item(&self, product: &str) -> RepositoryResult<bool>;
    }
}
