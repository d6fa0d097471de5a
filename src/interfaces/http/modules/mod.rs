pub mod auth;
pub mod energy_entries;
pub mod health;
pub mod metrics;
pub mod service_records;
pub mod service_types;
pub mod vehicles;
