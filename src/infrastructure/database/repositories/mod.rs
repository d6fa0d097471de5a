//! SeaORM-backed implementations of the domain repository interfaces

pub mod energy_entry_repository;
pub mod refresh_token_repository;
pub mod service_record_repository;
pub mod service_type_repository;
pub mod user_repository;
pub mod vehicle_repository;

pub use energy_entry_repository::EnergyEntryRepository;
pub use refresh_token_repository::RefreshTokenRepository;
pub use service_record_repository::ServiceRecordRepository;
pub use service_type_repository::ServiceTypeRepository;
pub use user_repository::UserRepository;
pub use vehicle_repository::VehicleRepository;
