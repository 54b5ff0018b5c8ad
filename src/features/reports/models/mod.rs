pub mod kind;
pub mod period;
pub mod table;

pub use kind::*;
pub use period::*;
pub use table::*;
