//! Maintenance use-cases: service records with line items, user-defined
//! service types, and computed-cost page sorting.

pub mod service;

pub use service::MaintenanceService;
