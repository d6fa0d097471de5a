//! SeaORM database entities

pub mod energy_entry;
pub mod refresh_token;
pub mod service_item;
pub mod service_record;
pub mod service_type;
pub mod user;
pub mod vehicle;
pub mod vehicle_energy_type;
