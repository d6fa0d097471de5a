//! Service record API handlers
//!
//! Nested under `/api/v1/vehicles/{vehicle_id}/service-records`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    parse_items, CreateServiceRecordRequest, ListServiceRecordsParams, ServiceRecordDto,
    UpdateServiceRecordRequest,
};
use crate::application::maintenance::MaintenanceService;
use crate::domain::{CreateServiceRecordDto, GetServiceRecordDto, UpdateServiceRecordDto};
use crate::infrastructure::database::repositories::{
    ServiceRecordRepository, ServiceTypeRepository, VehicleRepository,
};
use crate::interfaces::http::common::{
    error_response, ApiResponse, EmptyData, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

pub type ConcreteMaintenanceService =
    MaintenanceService<VehicleRepository, ServiceRecordRepository, ServiceTypeRepository>;

/// Service record handler state — concrete over the SeaORM repositories.
#[derive(Clone)]
pub struct ServiceRecordHandlerState {
    pub maintenance: Arc<ConcreteMaintenanceService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/{vehicle_id}/service-records",
    tag = "Service Records",
    security(("bearer_auth" = [])),
    params(
        ("vehicle_id" = String, Path, description = "Vehicle ID"),
        ListServiceRecordsParams
    ),
    responses(
        (status = 200, description = "Record list", body = PaginatedResponse<ServiceRecordDto>),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn list_records(
    State(state): State<ServiceRecordHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<String>,
    Query(params): Query<ListServiceRecordsParams>,
) -> Result<Json<PaginatedResponse<ServiceRecordDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let dto = GetServiceRecordDto {
        search: params.search,
        date_from: params.date_from,
        date_to: params.date_to,
        sort_by: params.sort_by,
        sort_descending: params.sort_desc,
        page: params.page,
        page_size: params.page_size,
    };

    match state
        .maintenance
        .list_records(&user.user_id, &vehicle_id, dto)
        .await
    {
        Ok(result) => Ok(Json(PaginatedResponse::from_result(
            result,
            ServiceRecordDto::from,
        ))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/vehicles/{vehicle_id}/service-records",
    tag = "Service Records",
    security(("bearer_auth" = [])),
    params(("vehicle_id" = String, Path, description = "Vehicle ID")),
    request_body = CreateServiceRecordRequest,
    responses(
        (status = 201, description = "Record created", body = ApiResponse<ServiceRecordDto>),
        (status = 404, description = "Vehicle or service type not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_record(
    State(state): State<ServiceRecordHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateServiceRecordRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<ServiceRecordDto>>),
    (StatusCode, Json<ApiResponse<ServiceRecordDto>>),
> {
    let items = parse_items(request.items).map_err(error_response)?;

    let dto = CreateServiceRecordDto {
        service_type_id: request.service_type_id,
        title: request.title,
        notes: request.notes,
        mileage: request.mileage,
        service_date: request.service_date,
        manual_cost: request.manual_cost,
        items,
    };

    match state
        .maintenance
        .create_record(&user.user_id, &vehicle_id, dto)
        .await
    {
        Ok(record) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(ServiceRecordDto::from(record))),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/{vehicle_id}/service-records/{record_id}",
    tag = "Service Records",
    security(("bearer_auth" = [])),
    params(
        ("vehicle_id" = String, Path, description = "Vehicle ID"),
        ("record_id" = String, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record details", body = ApiResponse<ServiceRecordDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_record(
    State(state): State<ServiceRecordHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((vehicle_id, record_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<ServiceRecordDto>>, (StatusCode, Json<ApiResponse<ServiceRecordDto>>)>
{
    match state
        .maintenance
        .get_record(&user.user_id, &vehicle_id, &record_id)
        .await
    {
        Ok(record) => Ok(Json(ApiResponse::success(ServiceRecordDto::from(record)))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/vehicles/{vehicle_id}/service-records/{record_id}",
    tag = "Service Records",
    security(("bearer_auth" = [])),
    params(
        ("vehicle_id" = String, Path, description = "Vehicle ID"),
        ("record_id" = String, Path, description = "Record ID")
    ),
    request_body = UpdateServiceRecordRequest,
    responses(
        (status = 200, description = "Record updated", body = ApiResponse<ServiceRecordDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_record(
    State(state): State<ServiceRecordHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((vehicle_id, record_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<UpdateServiceRecordRequest>,
) -> Result<Json<ApiResponse<ServiceRecordDto>>, (StatusCode, Json<ApiResponse<ServiceRecordDto>>)>
{
    let items = request.items.map(parse_items).transpose().map_err(error_response)?;

    let dto = UpdateServiceRecordDto {
        service_type_id: request.service_type_id,
        title: request.title,
        notes: request.notes,
        mileage: request.mileage,
        service_date: request.service_date,
        manual_cost: request.manual_cost,
        items,
    };

    match state
        .maintenance
        .update_record(&user.user_id, &vehicle_id, &record_id, dto)
        .await
    {
        Ok(record) => Ok(Json(ApiResponse::success(ServiceRecordDto::from(record)))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/vehicles/{vehicle_id}/service-records/{record_id}",
    tag = "Service Records",
    security(("bearer_auth" = [])),
    params(
        ("vehicle_id" = String, Path, description = "Vehicle ID"),
        ("record_id" = String, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_record(
    State(state): State<ServiceRecordHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((vehicle_id, record_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<EmptyData>>, (StatusCode, Json<ApiResponse<EmptyData>>)> {
    match state
        .maintenance
        .delete_record(&user.user_id, &vehicle_id, &record_id)
        .await
    {
        Ok(()) => Ok(Json(ApiResponse::success(EmptyData {}))),
        Err(e) => Err(error_response(e)),
    }
}
