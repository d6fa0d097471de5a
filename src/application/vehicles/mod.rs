//! Vehicle use-cases: CRUD, engine/energy compatibility, allowed-type
//! replacement validation.

pub mod compatibility;
pub mod energy_type_plan;
pub mod service;

pub use compatibility::{allowed_energy_types, find_incompatible, is_compatible};
pub use energy_type_plan::EnergyTypePlan;
pub use service::VehicleService;
