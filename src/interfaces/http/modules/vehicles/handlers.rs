//! Vehicle API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    parse_energy_types, parse_engine_type, CreateVehicleRequest, ListVehiclesParams,
    UpdateVehicleRequest, VehicleDto,
};
use crate::application::vehicles::VehicleService;
use crate::domain::{CreateVehicleDto, GetVehicleDto, UpdateVehicleDto};
use crate::infrastructure::database::repositories::{EnergyEntryRepository, VehicleRepository};
use crate::interfaces::http::common::{
    error_response, ApiResponse, EmptyData, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

pub type ConcreteVehicleService = VehicleService<VehicleRepository, EnergyEntryRepository>;

/// Vehicle handler state — concrete over the SeaORM repositories.
#[derive(Clone)]
pub struct VehicleHandlerState {
    pub vehicles: Arc<ConcreteVehicleService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles",
    tag = "Vehicles",
    security(("bearer_auth" = [])),
    params(ListVehiclesParams),
    responses(
        (status = 200, description = "Vehicle list", body = PaginatedResponse<VehicleDto>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_vehicles(
    State(state): State<VehicleHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<ListVehiclesParams>,
) -> Result<Json<PaginatedResponse<VehicleDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let dto = GetVehicleDto {
        search: params.search,
        page: params.page,
        page_size: params.page_size,
    };

    match state.vehicles.list_vehicles(&user.user_id, dto).await {
        Ok(result) => Ok(Json(PaginatedResponse::from_result(result, VehicleDto::from))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/vehicles",
    tag = "Vehicles",
    security(("bearer_auth" = [])),
    request_body = CreateVehicleRequest,
    responses(
        (status = 201, description = "Vehicle created", body = ApiResponse<VehicleDto>),
        (status = 400, description = "Incompatible energy types or bad engine type"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_vehicle(
    State(state): State<VehicleHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleDto>>), (StatusCode, Json<ApiResponse<VehicleDto>>)>
{
    let engine_type = parse_engine_type(&request.engine_type).map_err(error_response)?;
    let energy_types = request
        .energy_types
        .as_deref()
        .map(parse_energy_types)
        .transpose()
        .map_err(error_response)?;

    let dto = CreateVehicleDto {
        brand: request.brand,
        model: request.model,
        year: request.year,
        vin: request.vin,
        engine_type,
        energy_types,
    };

    match state.vehicles.create_vehicle(&user.user_id, dto).await {
        Ok(vehicle) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(VehicleDto::from(vehicle))),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/{vehicle_id}",
    tag = "Vehicles",
    security(("bearer_auth" = [])),
    params(("vehicle_id" = String, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle details", body = ApiResponse<VehicleDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_vehicle(
    State(state): State<VehicleHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<ApiResponse<VehicleDto>>, (StatusCode, Json<ApiResponse<VehicleDto>>)> {
    match state.vehicles.get_vehicle(&user.user_id, &vehicle_id).await {
        Ok(vehicle) => Ok(Json(ApiResponse::success(VehicleDto::from(vehicle)))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/vehicles/{vehicle_id}",
    tag = "Vehicles",
    security(("bearer_auth" = [])),
    params(("vehicle_id" = String, Path, description = "Vehicle ID")),
    request_body = UpdateVehicleRequest,
    responses(
        (status = 200, description = "Vehicle updated", body = ApiResponse<VehicleDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Removed energy types still have logged entries")
    )
)]
pub async fn update_vehicle(
    State(state): State<VehicleHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleDto>>, (StatusCode, Json<ApiResponse<VehicleDto>>)> {
    let engine_type = request
        .engine_type
        .as_deref()
        .map(parse_engine_type)
        .transpose()
        .map_err(error_response)?;
    let energy_types = request
        .energy_types
        .as_deref()
        .map(parse_energy_types)
        .transpose()
        .map_err(error_response)?;

    let dto = UpdateVehicleDto {
        brand: request.brand,
        model: request.model,
        year: request.year,
        vin: request.vin,
        engine_type,
        energy_types,
    };

    match state
        .vehicles
        .update_vehicle(&user.user_id, &vehicle_id, dto)
        .await
    {
        Ok(vehicle) => Ok(Json(ApiResponse::success(VehicleDto::from(vehicle)))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/vehicles/{vehicle_id}",
    tag = "Vehicles",
    security(("bearer_auth" = [])),
    params(("vehicle_id" = String, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_vehicle(
    State(state): State<VehicleHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<ApiResponse<EmptyData>>, (StatusCode, Json<ApiResponse<EmptyData>>)> {
    match state
        .vehicles
        .delete_vehicle(&user.user_id, &vehicle_id)
        .await
    {
        Ok(()) => Ok(Json(ApiResponse::success(EmptyData {}))),
        Err(e) => Err(error_response(e)),
    }
}
