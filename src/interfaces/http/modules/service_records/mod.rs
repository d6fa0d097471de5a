//! Service records module — maintenance events with billable line items

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
