//! Vehicle management service — application-layer orchestration
//!
//! Handlers stay thin; ownership checks, compatibility validation and the
//! allowed-energy-type replacement protocol all live here.

use std::sync::Arc;

use tracing::info;

use super::compatibility::{allowed_energy_types, find_incompatible};
use super::energy_type_plan::EnergyTypePlan;
use crate::domain::{
    CreateVehicleDto, DomainError, DomainResult, EnergyEntryRepositoryInterface, GetVehicleDto,
    UpdateVehicleDto, Vehicle, VehicleRepositoryInterface,
};
use crate::shared::PaginatedResult;

pub struct VehicleService<V, E>
where
    V: VehicleRepositoryInterface,
    E: EnergyEntryRepositoryInterface,
{
    vehicles: Arc<V>,
    energy_entries: Arc<E>,
}

impl<V, E> VehicleService<V, E>
where
    V: VehicleRepositoryInterface,
    E: EnergyEntryRepositoryInterface,
{
    pub fn new(vehicles: Arc<V>, energy_entries: Arc<E>) -> Self {
        Self {
            vehicles,
            energy_entries,
        }
    }

    pub async fn create_vehicle(
        &self,
        user_id: &str,
        dto: CreateVehicleDto,
    ) -> DomainResult<Vehicle> {
        if dto.year < 1900 || dto.year > 2100 {
            return Err(DomainError::Validation("Year out of range".into()));
        }

        // Default to everything the engine accepts; an explicit set must
        // be a subset of that.
        let energy_types = match &dto.energy_types {
            Some(requested) => {
                if requested.is_empty() {
                    return Err(DomainError::Validation(
                        "A vehicle needs at least one allowed energy type".into(),
                    ));
                }
                if let Some(bad) = find_incompatible(dto.engine_type, requested) {
                    return Err(DomainError::Validation(format!(
                        "Energy type '{}' is not compatible with a {} engine",
                        bad.as_str(),
                        dto.engine_type.as_str()
                    )));
                }
                requested.clone()
            }
            None => allowed_energy_types(dto.engine_type).to_vec(),
        };

        let vehicle = self
            .vehicles
            .create_vehicle(user_id, dto, energy_types)
            .await?;

        info!(vehicle_id = %vehicle.id, user_id, "Vehicle created");
        Ok(vehicle)
    }

    pub async fn list_vehicles(
        &self,
        user_id: &str,
        dto: GetVehicleDto,
    ) -> DomainResult<PaginatedResult<Vehicle>> {
        self.vehicles.list_vehicles(user_id, dto).await
    }

    pub async fn get_vehicle(&self, user_id: &str, id: &str) -> DomainResult<Vehicle> {
        self.vehicles
            .get_vehicle(user_id, id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Vehicle",
                field: "id",
                value: id.to_string(),
            })
    }

    /// Update a vehicle. A supplied `energy_types` set replaces the
    /// current one; removals of types with logged entries are rejected
    /// with a conflict naming the types and the affected row count.
    pub async fn update_vehicle(
        &self,
        user_id: &str,
        id: &str,
        dto: UpdateVehicleDto,
    ) -> DomainResult<Vehicle> {
        let current = self.get_vehicle(user_id, id).await?;

        if let Some(year) = dto.year {
            if !(1900..=2100).contains(&year) {
                return Err(DomainError::Validation("Year out of range".into()));
            }
        }

        let engine = dto.engine_type.unwrap_or(current.engine_type);
        let effective_types = dto
            .energy_types
            .clone()
            .unwrap_or_else(|| current.energy_types.clone());

        if effective_types.is_empty() {
            return Err(DomainError::Validation(
                "A vehicle needs at least one allowed energy type".into(),
            ));
        }
        if let Some(bad) = find_incompatible(engine, &effective_types) {
            return Err(DomainError::Validation(format!(
                "Energy type '{}' is not compatible with a {} engine",
                bad.as_str(),
                engine.as_str()
            )));
        }

        let plan = EnergyTypePlan::diff(&current.energy_types, &effective_types);
        if !plan.to_remove.is_empty() {
            // Only the removed types that actually have entries block the
            // update; the conflict names those and their combined count.
            let mut in_use = Vec::new();
            let mut entry_count = 0;
            for energy_type in &plan.to_remove {
                let count = self
                    .energy_entries
                    .count_entries_by_types(id, std::slice::from_ref(energy_type))
                    .await?;
                if count > 0 {
                    in_use.push(energy_type.as_str().to_string());
                    entry_count += count;
                }
            }
            if !in_use.is_empty() {
                return Err(DomainError::EnergyTypeInUse {
                    types: in_use,
                    entry_count,
                });
            }
        }

        let updated = self
            .vehicles
            .update_vehicle(user_id, id, dto)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Vehicle",
                field: "id",
                value: id.to_string(),
            })?;

        if plan.has_changes() {
            self.vehicles
                .replace_energy_types(id, effective_types.clone())
                .await?;
            info!(
                vehicle_id = id,
                added = plan.to_add.len(),
                removed = plan.to_remove.len(),
                "Vehicle energy types replaced"
            );
            return self.get_vehicle(user_id, id).await;
        }

        Ok(updated)
    }

    pub async fn delete_vehicle(&self, user_id: &str, id: &str) -> DomainResult<()> {
        let deleted = self.vehicles.delete_vehicle(user_id, id).await?;
        if !deleted {
            return Err(DomainError::NotFound {
                entity: "Vehicle",
                field: "id",
                value: id.to_string(),
            });
        }
        info!(vehicle_id = id, user_id, "Vehicle deleted");
        Ok(())
    }
}
