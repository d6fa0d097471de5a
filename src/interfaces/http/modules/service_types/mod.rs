//! Service types module — user-defined maintenance categories

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
