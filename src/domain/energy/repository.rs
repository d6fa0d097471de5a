use async_trait::async_trait;

use super::{CreateEnergyEntryDto, EnergyEntry, GetEnergyEntryDto, UpdateEnergyEntryDto};
use crate::domain::vehicle::EnergyType;
use crate::shared::{DomainResult, PaginatedResult};

#[async_trait]
pub trait EnergyEntryRepositoryInterface: Send + Sync {
    async fn create_entry(
        &self,
        vehicle_id: &str,
        dto: CreateEnergyEntryDto,
    ) -> DomainResult<EnergyEntry>;

    /// Paginated listing, filtered and sorted (entry date desc, mileage desc).
    async fn list_entries(
        &self,
        vehicle_id: &str,
        dto: GetEnergyEntryDto,
    ) -> DomainResult<PaginatedResult<EnergyEntry>>;

    /// Every entry of the vehicle, unpaginated. Used by the statistics
    /// aggregation and the mileage-ordering check.
    async fn list_all_entries(&self, vehicle_id: &str) -> DomainResult<Vec<EnergyEntry>>;

    async fn get_entry(&self, vehicle_id: &str, id: &str) -> DomainResult<Option<EnergyEntry>>;

    async fn update_entry(
        &self,
        vehicle_id: &str,
        id: &str,
        dto: UpdateEnergyEntryDto,
    ) -> DomainResult<Option<EnergyEntry>>;

    /// Returns `true` if a row was deleted.
    async fn delete_entry(&self, vehicle_id: &str, id: &str) -> DomainResult<bool>;

    /// Number of entries logged against the vehicle with any of the given
    /// energy types.
    async fn count_entries_by_types(
        &self,
        vehicle_id: &str,
        energy_types: &[EnergyType],
    ) -> DomainResult<u64>;
}
