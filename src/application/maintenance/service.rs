//! Maintenance service — service records, line items and categories

use std::sync::Arc;

use tracing::info;

use crate::domain::maintenance::{sort_by_total_cost, ServiceRecordSortField};
use crate::domain::{
    CreateServiceRecordDto, DomainError, DomainResult, GetServiceRecordDto, ServiceRecord,
    ServiceRecordRepositoryInterface, ServiceType, ServiceTypeRepositoryInterface,
    UpdateServiceRecordDto, VehicleRepositoryInterface,
};
use crate::shared::PaginatedResult;

pub struct MaintenanceService<V, R, T>
where
    V: VehicleRepositoryInterface,
    R: ServiceRecordRepositoryInterface,
    T: ServiceTypeRepositoryInterface,
{
    vehicles: Arc<V>,
    records: Arc<R>,
    types: Arc<T>,
}

impl<V, R, T> MaintenanceService<V, R, T>
where
    V: VehicleRepositoryInterface,
    R: ServiceRecordRepositoryInterface,
    T: ServiceTypeRepositoryInterface,
{
    pub fn new(vehicles: Arc<V>, records: Arc<R>, types: Arc<T>) -> Self {
        Self {
            vehicles,
            records,
            types,
        }
    }

    async fn check_vehicle(&self, user_id: &str, vehicle_id: &str) -> DomainResult<()> {
        self.vehicles
            .get_vehicle(user_id, vehicle_id)
            .await?
            .map(|_| ())
            .ok_or(DomainError::NotFound {
                entity: "Vehicle",
                field: "id",
                value: vehicle_id.to_string(),
            })
    }

    async fn check_service_type(&self, user_id: &str, service_type_id: &str) -> DomainResult<()> {
        self.types
            .get_type(user_id, service_type_id)
            .await?
            .map(|_| ())
            .ok_or(DomainError::NotFound {
                entity: "ServiceType",
                field: "id",
                value: service_type_id.to_string(),
            })
    }

    // ── Service records ─────────────────────────────────────────

    pub async fn create_record(
        &self,
        user_id: &str,
        vehicle_id: &str,
        dto: CreateServiceRecordDto,
    ) -> DomainResult<ServiceRecord> {
        self.check_vehicle(user_id, vehicle_id).await?;
        self.check_service_type(user_id, &dto.service_type_id).await?;

        if dto.title.trim().is_empty() {
            return Err(DomainError::Validation("Title must not be empty".into()));
        }

        let record = self.records.create_record(vehicle_id, dto).await?;
        metrics::counter!("service_records_created_total").increment(1);
        info!(record_id = %record.id, vehicle_id, "Service record created");
        Ok(record)
    }

    /// List records. Database ordering covers the plain sort fields; the
    /// computed total-cost field re-sorts the materialized page here.
    pub async fn list_records(
        &self,
        user_id: &str,
        vehicle_id: &str,
        dto: GetServiceRecordDto,
    ) -> DomainResult<PaginatedResult<ServiceRecord>> {
        self.check_vehicle(user_id, vehicle_id).await?;

        let sort_field = dto
            .sort_by
            .as_deref()
            .map(ServiceRecordSortField::parse)
            .unwrap_or(ServiceRecordSortField::ServiceDate);
        let descending = dto.sort_descending;

        let mut page = self.records.list_records(vehicle_id, dto).await?;
        if sort_field.requires_in_memory_sorting() {
            sort_by_total_cost(&mut page.items, descending);
        }
        Ok(page)
    }

    pub async fn get_record(
        &self,
        user_id: &str,
        vehicle_id: &str,
        id: &str,
    ) -> DomainResult<ServiceRecord> {
        self.check_vehicle(user_id, vehicle_id).await?;
        self.records
            .get_record(vehicle_id, id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "ServiceRecord",
                field: "id",
                value: id.to_string(),
            })
    }

    pub async fn update_record(
        &self,
        user_id: &str,
        vehicle_id: &str,
        id: &str,
        dto: UpdateServiceRecordDto,
    ) -> DomainResult<ServiceRecord> {
        self.check_vehicle(user_id, vehicle_id).await?;
        if let Some(service_type_id) = &dto.service_type_id {
            self.check_service_type(user_id, service_type_id).await?;
        }
        if let Some(title) = &dto.title {
            if title.trim().is_empty() {
                return Err(DomainError::Validation("Title must not be empty".into()));
            }
        }

        self.records
            .update_record(vehicle_id, id, dto)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "ServiceRecord",
                field: "id",
                value: id.to_string(),
            })
    }

    pub async fn delete_record(
        &self,
        user_id: &str,
        vehicle_id: &str,
        id: &str,
    ) -> DomainResult<()> {
        self.check_vehicle(user_id, vehicle_id).await?;
        let deleted = self.records.delete_record(vehicle_id, id).await?;
        if !deleted {
            return Err(DomainError::NotFound {
                entity: "ServiceRecord",
                field: "id",
                value: id.to_string(),
            });
        }
        info!(record_id = id, vehicle_id, "Service record deleted");
        Ok(())
    }

    // ── Service types ───────────────────────────────────────────

    pub async fn create_type(&self, user_id: &str, name: &str) -> DomainResult<ServiceType> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation("Name must not be empty".into()));
        }
        self.types.create_type(user_id, name.trim()).await
    }

    pub async fn list_types(&self, user_id: &str) -> DomainResult<Vec<ServiceType>> {
        self.types.list_types(user_id).await
    }

    pub async fn get_type(&self, user_id: &str, id: &str) -> DomainResult<ServiceType> {
        self.types
            .get_type(user_id, id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "ServiceType",
                field: "id",
                value: id.to_string(),
            })
    }

    pub async fn update_type(
        &self,
        user_id: &str,
        id: &str,
        name: &str,
    ) -> DomainResult<ServiceType> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation("Name must not be empty".into()));
        }
        self.types
            .update_type(user_id, id, name.trim())
            .await?
            .ok_or(DomainError::NotFound {
                entity: "ServiceType",
                field: "id",
                value: id.to_string(),
            })
    }

    /// Delete a category. Rejected while service records still reference it.
    pub async fn delete_type(&self, user_id: &str, id: &str) -> DomainResult<()> {
        self.get_type(user_id, id).await?;

        let referencing = self.records.count_records_by_service_type(id).await?;
        if referencing > 0 {
            return Err(DomainError::Conflict(format!(
                "Service type is referenced by {} service records",
                referencing
            )));
        }

        let deleted = self.types.delete_type(user_id, id).await?;
        if !deleted {
            return Err(DomainError::NotFound {
                entity: "ServiceType",
                field: "id",
                value: id.to_string(),
            });
        }
        info!(service_type_id = id, user_id, "Service type deleted");
        Ok(())
    }
}
