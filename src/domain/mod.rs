pub mod cart;
pub mod chatbot;
pub mod emergency;
pub mod learning_class;
pub mod order;
pub mod webinar;
