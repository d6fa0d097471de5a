//! Vehicles module — vehicle CRUD and allowed-energy-type management

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
