//! User administration commands.

pub mod clients;
pub mod dtos;
pub mod services;

pub use clients::{AdminBackend, HttpAdminClient};
pub use services::AdminActions;
