pub mod cart;
pub mod learning_class;
pub mod order;
pub mod webinar;
