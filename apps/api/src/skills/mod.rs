pub mod catalog;
pub mod handlers;
pub mod validation;
