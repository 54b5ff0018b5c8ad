//! Client layer of the electrician attendance tool: debounced personnel and
//! prefix search, the registration workspace, report rendering and user
//! administration, all driving the attendance backend over HTTP.

pub mod core;
pub mod features;
pub mod shared;

pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use crate::core::http::HttpClient;
