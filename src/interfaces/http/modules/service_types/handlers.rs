//! Service type API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{ServiceTypeDto, ServiceTypeRequest};
use crate::interfaces::http::common::{error_response, ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::service_records::ConcreteMaintenanceService;

/// Service type handler state, shares the maintenance service.
#[derive(Clone)]
pub struct ServiceTypeHandlerState {
    pub maintenance: Arc<ConcreteMaintenanceService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/service-types",
    tag = "Service Types",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All categories of the current user", body = ApiResponse<Vec<ServiceTypeDto>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_types(
    State(state): State<ServiceTypeHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<ServiceTypeDto>>>, (StatusCode, Json<ApiResponse<Vec<ServiceTypeDto>>>)>
{
    match state.maintenance.list_types(&user.user_id).await {
        Ok(types) => Ok(Json(ApiResponse::success(
            types.into_iter().map(ServiceTypeDto::from).collect(),
        ))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/service-types",
    tag = "Service Types",
    security(("bearer_auth" = [])),
    request_body = ServiceTypeRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<ServiceTypeDto>),
        (status = 409, description = "Name already exists")
    )
)]
pub async fn create_type(
    State(state): State<ServiceTypeHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<ServiceTypeRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<ServiceTypeDto>>),
    (StatusCode, Json<ApiResponse<ServiceTypeDto>>),
> {
    match state.maintenance.create_type(&user.user_id, &request.name).await {
        Ok(t) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(ServiceTypeDto::from(t))),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/service-types/{type_id}",
    tag = "Service Types",
    security(("bearer_auth" = [])),
    params(("type_id" = String, Path, description = "Service type ID")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<ServiceTypeDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_type(
    State(state): State<ServiceTypeHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(type_id): Path<String>,
) -> Result<Json<ApiResponse<ServiceTypeDto>>, (StatusCode, Json<ApiResponse<ServiceTypeDto>>)> {
    match state.maintenance.get_type(&user.user_id, &type_id).await {
        Ok(t) => Ok(Json(ApiResponse::success(ServiceTypeDto::from(t)))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/service-types/{type_id}",
    tag = "Service Types",
    security(("bearer_auth" = [])),
    params(("type_id" = String, Path, description = "Service type ID")),
    request_body = ServiceTypeRequest,
    responses(
        (status = 200, description = "Category renamed", body = ApiResponse<ServiceTypeDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_type(
    State(state): State<ServiceTypeHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(type_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ServiceTypeRequest>,
) -> Result<Json<ApiResponse<ServiceTypeDto>>, (StatusCode, Json<ApiResponse<ServiceTypeDto>>)> {
    match state
        .maintenance
        .update_type(&user.user_id, &type_id, &request.name)
        .await
    {
        Ok(t) => Ok(Json(ApiResponse::success(ServiceTypeDto::from(t)))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/service-types/{type_id}",
    tag = "Service Types",
    security(("bearer_auth" = [])),
    params(("type_id" = String, Path, description = "Service type ID")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Still referenced by service records")
    )
)]
pub async fn delete_type(
    State(state): State<ServiceTypeHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(type_id): Path<String>,
) -> Result<Json<ApiResponse<EmptyData>>, (StatusCode, Json<ApiResponse<EmptyData>>)> {
    match state.maintenance.delete_type(&user.user_id, &type_id).await {
        Ok(()) => Ok(Json(ApiResponse::success(EmptyData {}))),
        Err(e) => Err(error_response(e)),
    }
}
