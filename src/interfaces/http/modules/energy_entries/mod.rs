//! Energy entries module — fill-up / charge logging and statistics

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
