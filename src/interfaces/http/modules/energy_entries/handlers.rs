//! Energy entry API handlers
//!
//! Nested under `/api/v1/vehicles/{vehicle_id}/energy-entries`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    parse_energy_unit, parse_type_filter, CreateEnergyEntryRequest, EnergyEntryDto,
    ListEnergyEntriesParams, StatisticsParams, UpdateEnergyEntryRequest,
    VehicleEnergyStatisticsDto,
};
use crate::application::energy::EnergyEntryService;
use crate::domain::{CreateEnergyEntryDto, GetEnergyEntryDto, UpdateEnergyEntryDto};
use crate::infrastructure::database::repositories::{EnergyEntryRepository, VehicleRepository};
use crate::interfaces::http::common::{
    error_response, ApiResponse, EmptyData, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::vehicles::dto::parse_energy_type;

pub type ConcreteEnergyEntryService = EnergyEntryService<VehicleRepository, EnergyEntryRepository>;

/// Energy entry handler state — concrete over the SeaORM repositories.
#[derive(Clone)]
pub struct EnergyEntryHandlerState {
    pub entries: Arc<ConcreteEnergyEntryService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/{vehicle_id}/energy-entries",
    tag = "Energy Entries",
    security(("bearer_auth" = [])),
    params(
        ("vehicle_id" = String, Path, description = "Vehicle ID"),
        ListEnergyEntriesParams
    ),
    responses(
        (status = 200, description = "Entry list, newest first", body = PaginatedResponse<EnergyEntryDto>),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn list_entries(
    State(state): State<EnergyEntryHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<String>,
    Query(params): Query<ListEnergyEntriesParams>,
) -> Result<Json<PaginatedResponse<EnergyEntryDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let energy_types =
        parse_type_filter(params.energy_types.as_deref()).map_err(error_response)?;

    let dto = GetEnergyEntryDto {
        energy_types,
        page: params.page,
        page_size: params.page_size,
    };

    match state
        .entries
        .list_entries(&user.user_id, &vehicle_id, dto)
        .await
    {
        Ok(result) => Ok(Json(PaginatedResponse::from_result(
            result,
            EnergyEntryDto::from,
        ))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/vehicles/{vehicle_id}/energy-entries",
    tag = "Energy Entries",
    security(("bearer_auth" = [])),
    params(("vehicle_id" = String, Path, description = "Vehicle ID")),
    request_body = CreateEnergyEntryRequest,
    responses(
        (status = 201, description = "Entry logged", body = ApiResponse<EnergyEntryDto>),
        (status = 400, description = "Energy type not enabled for the vehicle"),
        (status = 422, description = "Mileage contradicts the entry history")
    )
)]
pub async fn create_entry(
    State(state): State<EnergyEntryHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateEnergyEntryRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<EnergyEntryDto>>),
    (StatusCode, Json<ApiResponse<EnergyEntryDto>>),
> {
    let energy_type = parse_energy_type(&request.energy_type).map_err(error_response)?;
    let energy_unit = parse_energy_unit(&request.energy_unit).map_err(error_response)?;

    let dto = CreateEnergyEntryDto {
        entry_date: request.entry_date,
        mileage: request.mileage,
        energy_type,
        energy_unit,
        volume: request.volume,
        cost: request.cost,
        price_per_unit: request.price_per_unit,
    };

    match state
        .entries
        .create_entry(&user.user_id, &vehicle_id, dto)
        .await
    {
        Ok(entry) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(EnergyEntryDto::from(entry))),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/{vehicle_id}/energy-entries/{entry_id}",
    tag = "Energy Entries",
    security(("bearer_auth" = [])),
    params(
        ("vehicle_id" = String, Path, description = "Vehicle ID"),
        ("entry_id" = String, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "Entry details", body = ApiResponse<EnergyEntryDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_entry(
    State(state): State<EnergyEntryHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((vehicle_id, entry_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<EnergyEntryDto>>, (StatusCode, Json<ApiResponse<EnergyEntryDto>>)> {
    match state
        .entries
        .get_entry(&user.user_id, &vehicle_id, &entry_id)
        .await
    {
        Ok(entry) => Ok(Json(ApiResponse::success(EnergyEntryDto::from(entry)))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/vehicles/{vehicle_id}/energy-entries/{entry_id}",
    tag = "Energy Entries",
    security(("bearer_auth" = [])),
    params(
        ("vehicle_id" = String, Path, description = "Vehicle ID"),
        ("entry_id" = String, Path, description = "Entry ID")
    ),
    request_body = UpdateEnergyEntryRequest,
    responses(
        (status = 200, description = "Entry updated", body = ApiResponse<EnergyEntryDto>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Mileage contradicts the entry history")
    )
)]
pub async fn update_entry(
    State(state): State<EnergyEntryHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((vehicle_id, entry_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<UpdateEnergyEntryRequest>,
) -> Result<Json<ApiResponse<EnergyEntryDto>>, (StatusCode, Json<ApiResponse<EnergyEntryDto>>)> {
    let energy_type = request
        .energy_type
        .as_deref()
        .map(parse_energy_type)
        .transpose()
        .map_err(error_response)?;
    let energy_unit = request
        .energy_unit
        .as_deref()
        .map(parse_energy_unit)
        .transpose()
        .map_err(error_response)?;

    let dto = UpdateEnergyEntryDto {
        entry_date: request.entry_date,
        mileage: request.mileage,
        energy_type,
        energy_unit,
        volume: request.volume,
        cost: request.cost,
        price_per_unit: request.price_per_unit,
    };

    match state
        .entries
        .update_entry(&user.user_id, &vehicle_id, &entry_id, dto)
        .await
    {
        Ok(entry) => Ok(Json(ApiResponse::success(EnergyEntryDto::from(entry)))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/vehicles/{vehicle_id}/energy-entries/{entry_id}",
    tag = "Energy Entries",
    security(("bearer_auth" = [])),
    params(
        ("vehicle_id" = String, Path, description = "Vehicle ID"),
        ("entry_id" = String, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "Entry deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_entry(
    State(state): State<EnergyEntryHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((vehicle_id, entry_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<EmptyData>>, (StatusCode, Json<ApiResponse<EmptyData>>)> {
    match state
        .entries
        .delete_entry(&user.user_id, &vehicle_id, &entry_id)
        .await
    {
        Ok(()) => Ok(Json(ApiResponse::success(EmptyData {}))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/{vehicle_id}/energy-entries/stats",
    tag = "Energy Entries",
    security(("bearer_auth" = [])),
    params(
        ("vehicle_id" = String, Path, description = "Vehicle ID"),
        StatisticsParams
    ),
    responses(
        (status = 200, description = "Per-unit statistics", body = ApiResponse<VehicleEnergyStatisticsDto>),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn get_statistics(
    State(state): State<EnergyEntryHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<String>,
    Query(params): Query<StatisticsParams>,
) -> Result<
    Json<ApiResponse<VehicleEnergyStatisticsDto>>,
    (StatusCode, Json<ApiResponse<VehicleEnergyStatisticsDto>>),
> {
    let energy_types =
        parse_type_filter(params.energy_types.as_deref()).map_err(error_response)?;

    match state
        .entries
        .statistics(&user.user_id, &vehicle_id, energy_types)
        .await
    {
        Ok(stats) => Ok(Json(ApiResponse::success(
            VehicleEnergyStatisticsDto::from(stats),
        ))),
        Err(e) => Err(error_response(e)),
    }
}
