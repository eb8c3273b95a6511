pub use errors::{ServiceError, ServiceResult};

pub mod cart;
pub mod chatbot;
pub mod errors;
pub mod learning_classes;
pub mod orders;
pub mod prescriptions;
pub mod webinars;
