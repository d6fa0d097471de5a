//! Energy use-cases: entry logging with invariant checks, listing, and
//! per-unit statistics aggregation.

pub mod mileage;
pub mod service;
pub mod stats;

pub use mileage::is_mileage_consistent;
pub use service::EnergyEntryService;
pub use stats::{UnitStatistics, VehicleEnergyStatistics};
