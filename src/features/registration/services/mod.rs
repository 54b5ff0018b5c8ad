pub mod unavailability;
pub mod workspace;

pub use unavailability::*;
pub use workspace::*;
