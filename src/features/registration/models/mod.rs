pub mod board;
pub mod mode;
pub mod queue;

pub use board::*;
pub use mode::*;
pub use queue::*;
