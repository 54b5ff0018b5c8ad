mod search_dto;

pub(crate) use search_dto::null_as_empty;
pub use search_dto::*;
