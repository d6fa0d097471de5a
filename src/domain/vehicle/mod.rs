//! Vehicle aggregate
//!
//! The vehicle entity, the powertrain enums shared across the crate, and
//! the repository interface.

pub mod model;
pub mod repository;

mod dto_create;
mod dto_get;
mod dto_update;

pub use dto_create::CreateVehicleDto;
pub use dto_get::GetVehicleDto;
pub use dto_update::UpdateVehicleDto;
pub use model::{EnergyType, EngineType, Vehicle};
pub use repository::VehicleRepositoryInterface;
