use async_trait::async_trait;

use super::{CreateVehicleDto, EnergyType, GetVehicleDto, UpdateVehicleDto, Vehicle};
use crate::shared::{DomainResult, PaginatedResult};

/// All lookups are scoped by the owning user id; a vehicle belonging to
/// another user behaves as if it does not exist.
#[async_trait]
pub trait VehicleRepositoryInterface: Send + Sync {
    async fn create_vehicle(
        &self,
        user_id: &str,
        dto: CreateVehicleDto,
        energy_types: Vec<EnergyType>,
    ) -> DomainResult<Vehicle>;

    async fn list_vehicles(
        &self,
        user_id: &str,
        dto: GetVehicleDto,
    ) -> DomainResult<PaginatedResult<Vehicle>>;

    async fn get_vehicle(&self, user_id: &str, id: &str) -> DomainResult<Option<Vehicle>>;

    async fn update_vehicle(
        &self,
        user_id: &str,
        id: &str,
        dto: UpdateVehicleDto,
    ) -> DomainResult<Option<Vehicle>>;

    /// Replace the vehicle's allowed energy types wholesale.
    async fn replace_energy_types(
        &self,
        vehicle_id: &str,
        energy_types: Vec<EnergyType>,
    ) -> DomainResult<()>;

    /// Returns `true` if a row was deleted.
    async fn delete_vehicle(&self, user_id: &str, id: &str) -> DomainResult<bool>;
}
