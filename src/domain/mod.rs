//! Core business entities, DTOs and repository interfaces
//!
//! Each aggregate module bundles its model, DTOs and repository trait.
//! Implementations live in `infrastructure::database::repositories`.

pub mod energy;
pub mod maintenance;
pub mod refresh_token;
pub mod user;
pub mod vehicle;

pub use energy::{
    CreateEnergyEntryDto, EnergyEntry, EnergyEntryRepositoryInterface, EnergyUnit,
    GetEnergyEntryDto, UpdateEnergyEntryDto,
};
pub use maintenance::{
    CreateServiceItemDto, CreateServiceRecordDto, GetServiceRecordDto, ServiceItem,
    ServiceItemKind, ServiceRecord, ServiceRecordRepositoryInterface, ServiceRecordSortField,
    ServiceType, ServiceTypeRepositoryInterface, UpdateServiceRecordDto,
};
pub use refresh_token::{CreateRefreshTokenDto, RefreshToken, RefreshTokenRepositoryInterface};
pub use user::{CreateUserDto, UpdateUserDto, User, UserRepositoryInterface};
pub use vehicle::{
    CreateVehicleDto, EnergyType, EngineType, GetVehicleDto, UpdateVehicleDto, Vehicle,
    VehicleRepositoryInterface,
};

// Re-export error types alongside the domain for convenience
pub use crate::shared::types::errors::{DomainError, DomainResult, InfraError};
