//! Energy entry service — logging, listing and statistics
//!
//! Enforces the two entry invariants before anything reaches the
//! database: the energy type must be allowed for the vehicle, and the
//! (date, mileage) pair must be consistent with the vehicle's history.

use std::sync::Arc;

use tracing::info;

use super::mileage::is_mileage_consistent;
use super::stats::{aggregate, VehicleEnergyStatistics};
use crate::domain::{
    CreateEnergyEntryDto, DomainError, DomainResult, EnergyEntry, EnergyEntryRepositoryInterface,
    EnergyType, GetEnergyEntryDto, UpdateEnergyEntryDto, Vehicle, VehicleRepositoryInterface,
};
use crate::shared::PaginatedResult;

pub struct EnergyEntryService<V, E>
where
    V: VehicleRepositoryInterface,
    E: EnergyEntryRepositoryInterface,
{
    vehicles: Arc<V>,
    entries: Arc<E>,
}

impl<V, E> EnergyEntryService<V, E>
where
    V: VehicleRepositoryInterface,
    E: EnergyEntryRepositoryInterface,
{
    pub fn new(vehicles: Arc<V>, entries: Arc<E>) -> Self {
        Self { vehicles, entries }
    }

    async fn owned_vehicle(&self, user_id: &str, vehicle_id: &str) -> DomainResult<Vehicle> {
        self.vehicles
            .get_vehicle(user_id, vehicle_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Vehicle",
                field: "id",
                value: vehicle_id.to_string(),
            })
    }

    fn check_type_allowed(vehicle: &Vehicle, energy_type: EnergyType) -> DomainResult<()> {
        if vehicle.energy_types.contains(&energy_type) {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "Energy type '{}' is not enabled for this vehicle",
                energy_type.as_str()
            )))
        }
    }

    pub async fn create_entry(
        &self,
        user_id: &str,
        vehicle_id: &str,
        dto: CreateEnergyEntryDto,
    ) -> DomainResult<EnergyEntry> {
        let vehicle = self.owned_vehicle(user_id, vehicle_id).await?;
        Self::check_type_allowed(&vehicle, dto.energy_type)?;

        if dto.volume <= 0.0 {
            return Err(DomainError::Validation("Volume must be positive".into()));
        }

        let siblings = self.entries.list_all_entries(vehicle_id).await?;
        if !is_mileage_consistent(&siblings, vehicle_id, None, dto.entry_date, dto.mileage) {
            return Err(DomainError::MileageOutOfOrder {
                mileage: dto.mileage,
            });
        }

        let entry = self.entries.create_entry(vehicle_id, dto).await?;
        metrics::counter!("energy_entries_created_total").increment(1);
        info!(entry_id = %entry.id, vehicle_id, "Energy entry logged");
        Ok(entry)
    }

    pub async fn list_entries(
        &self,
        user_id: &str,
        vehicle_id: &str,
        dto: GetEnergyEntryDto,
    ) -> DomainResult<PaginatedResult<EnergyEntry>> {
        self.owned_vehicle(user_id, vehicle_id).await?;
        self.entries.list_entries(vehicle_id, dto).await
    }

    pub async fn get_entry(
        &self,
        user_id: &str,
        vehicle_id: &str,
        id: &str,
    ) -> DomainResult<EnergyEntry> {
        self.owned_vehicle(user_id, vehicle_id).await?;
        self.entries
            .get_entry(vehicle_id, id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "EnergyEntry",
                field: "id",
                value: id.to_string(),
            })
    }

    pub async fn update_entry(
        &self,
        user_id: &str,
        vehicle_id: &str,
        id: &str,
        dto: UpdateEnergyEntryDto,
    ) -> DomainResult<EnergyEntry> {
        let vehicle = self.owned_vehicle(user_id, vehicle_id).await?;
        let existing = self
            .entries
            .get_entry(vehicle_id, id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "EnergyEntry",
                field: "id",
                value: id.to_string(),
            })?;

        if let Some(energy_type) = dto.energy_type {
            Self::check_type_allowed(&vehicle, energy_type)?;
        }
        if let Some(volume) = dto.volume {
            if volume <= 0.0 {
                return Err(DomainError::Validation("Volume must be positive".into()));
            }
        }

        // Validate the effective (date, mileage) pair against all siblings,
        // excluding the stored row being replaced.
        let candidate_date = dto.entry_date.unwrap_or(existing.entry_date);
        let candidate_mileage = dto.mileage.unwrap_or(existing.mileage);
        let siblings = self.entries.list_all_entries(vehicle_id).await?;
        if !is_mileage_consistent(
            &siblings,
            vehicle_id,
            Some(id),
            candidate_date,
            candidate_mileage,
        ) {
            return Err(DomainError::MileageOutOfOrder {
                mileage: candidate_mileage,
            });
        }

        self.entries
            .update_entry(vehicle_id, id, dto)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "EnergyEntry",
                field: "id",
                value: id.to_string(),
            })
    }

    pub async fn delete_entry(&self, user_id: &str, vehicle_id: &str, id: &str) -> DomainResult<()> {
        self.owned_vehicle(user_id, vehicle_id).await?;
        let deleted = self.entries.delete_entry(vehicle_id, id).await?;
        if !deleted {
            return Err(DomainError::NotFound {
                entity: "EnergyEntry",
                field: "id",
                value: id.to_string(),
            });
        }
        info!(entry_id = id, vehicle_id, "Energy entry deleted");
        Ok(())
    }

    /// Per-unit statistics over the vehicle's entries, optionally
    /// pre-filtered by energy type.
    pub async fn statistics(
        &self,
        user_id: &str,
        vehicle_id: &str,
        energy_types: Option<Vec<EnergyType>>,
    ) -> DomainResult<VehicleEnergyStatistics> {
        self.owned_vehicle(user_id, vehicle_id).await?;
        let entries = self.entries.list_all_entries(vehicle_id).await?;
        Ok(aggregate(entries, energy_types.as_deref()))
    }
}
