use async_trait::async_trait;

use super::{
    CreateServiceRecordDto, GetServiceRecordDto, ServiceRecord, ServiceType,
    UpdateServiceRecordDto,
};
use crate::shared::{DomainResult, PaginatedResult};

#[async_trait]
pub trait ServiceRecordRepositoryInterface: Send + Sync {
    async fn create_record(
        &self,
        vehicle_id: &str,
        dto: CreateServiceRecordDto,
    ) -> DomainResult<ServiceRecord>;

    /// Paginated listing with search / date-range filters. Sorting is
    /// applied at the database level except for computed fields; callers
    /// re-sort those pages in memory (see `ServiceRecordSortField`).
    async fn list_records(
        &self,
        vehicle_id: &str,
        dto: GetServiceRecordDto,
    ) -> DomainResult<PaginatedResult<ServiceRecord>>;

    async fn get_record(&self, vehicle_id: &str, id: &str) -> DomainResult<Option<ServiceRecord>>;

    async fn update_record(
        &self,
        vehicle_id: &str,
        id: &str,
        dto: UpdateServiceRecordDto,
    ) -> DomainResult<Option<ServiceRecord>>;

    /// Returns `true` if a row was deleted. Line items cascade.
    async fn delete_record(&self, vehicle_id: &str, id: &str) -> DomainResult<bool>;

    /// Number of records referencing the given service type, across all of
    /// the user's vehicles.
    async fn count_records_by_service_type(&self, service_type_id: &str) -> DomainResult<u64>;
}

#[async_trait]
pub trait ServiceTypeRepositoryInterface: Send + Sync {
    async fn create_type(&self, user_id: &str, name: &str) -> DomainResult<ServiceType>;
    async fn list_types(&self, user_id: &str) -> DomainResult<Vec<ServiceType>>;
    async fn get_type(&self, user_id: &str, id: &str) -> DomainResult<Option<ServiceType>>;
    async fn update_type(
        &self,
        user_id: &str,
        id: &str,
        name: &str,
    ) -> DomainResult<Option<ServiceType>>;
    async fn delete_type(&self, user_id: &str, id: &str) -> DomainResult<bool>;
}
