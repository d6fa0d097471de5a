//! Business logic and use cases
//!
//! Stateless services, each generic over the repository traits it needs.

pub mod energy;
pub mod identity;
pub mod maintenance;
pub mod vehicles;

pub use energy::EnergyEntryService;
pub use identity::IdentityService;
pub use maintenance::MaintenanceService;
pub use vehicles::VehicleService;
