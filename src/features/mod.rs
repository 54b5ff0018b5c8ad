pub mod admin;
pub mod registration;
pub mod reports;
pub mod search;
