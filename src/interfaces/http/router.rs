//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{
    EnergyEntryService, IdentityService, MaintenanceService, VehicleService,
};
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::repositories::{
    EnergyEntryRepository, RefreshTokenRepository, ServiceRecordRepository,
    ServiceTypeRepository, UserRepository, VehicleRepository,
};
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse};
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::{
    auth, energy_entries, health, metrics as metrics_module, service_records, service_types,
    vehicles,
};

/// Unified state for the `/api/v1/vehicles` subtree, which hosts the
/// vehicle CRUD plus the nested energy-entry and service-record routes.
/// Axum extracts each handler's state via `FromRef`.
#[derive(Clone)]
pub struct VehicleUnifiedState {
    pub vehicles: vehicles::VehicleHandlerState,
    pub energy_entries: energy_entries::EnergyEntryHandlerState,
    pub service_records: service_records::ServiceRecordHandlerState,
    pub auth: AuthState,
}

impl FromRef<VehicleUnifiedState> for vehicles::VehicleHandlerState {
    fn from_ref(s: &VehicleUnifiedState) -> Self {
        s.vehicles.clone()
    }
}

impl FromRef<VehicleUnifiedState> for energy_entries::EnergyEntryHandlerState {
    fn from_ref(s: &VehicleUnifiedState) -> Self {
        s.energy_entries.clone()
    }
}

impl FromRef<VehicleUnifiedState> for service_records::ServiceRecordHandlerState {
    fn from_ref(s: &VehicleUnifiedState) -> Self {
        s.service_records.clone()
    }
}

impl FromRef<VehicleUnifiedState> for AuthState {
    fn from_ref(s: &VehicleUnifiedState) -> Self {
        s.auth.clone()
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::register,
        auth::login,
        auth::refresh,
        auth::logout,
        auth::get_current_user,
        auth::update_profile,
        auth::change_password,
        // Vehicles
        vehicles::list_vehicles,
        vehicles::create_vehicle,
        vehicles::get_vehicle,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
        // Energy entries
        energy_entries::list_entries,
        energy_entries::create_entry,
        energy_entries::get_entry,
        energy_entries::update_entry,
        energy_entries::delete_entry,
        energy_entries::get_statistics,
        // Service records
        service_records::list_records,
        service_records::create_record,
        service_records::get_record,
        service_records::update_record,
        service_records::delete_record,
        // Service types
        service_types::list_types,
        service_types::create_type,
        service_types::get_type,
        service_types::update_type,
        service_types::delete_type,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginatedResponse<vehicles::VehicleDto>,
            PaginatedResponse<energy_entries::EnergyEntryDto>,
            PaginatedResponse<service_records::ServiceRecordDto>,
            // Auth
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::RefreshTokenRequest,
            auth::ChangePasswordRequest,
            auth::UpdateProfileRequest,
            auth::AuthResponse,
            auth::UserInfo,
            // Vehicles
            vehicles::VehicleDto,
            vehicles::CreateVehicleRequest,
            vehicles::UpdateVehicleRequest,
            // Energy entries
            energy_entries::EnergyEntryDto,
            energy_entries::CreateEnergyEntryRequest,
            energy_entries::UpdateEnergyEntryRequest,
            energy_entries::UnitStatisticsDto,
            energy_entries::VehicleEnergyStatisticsDto,
            // Service records
            service_records::ServiceRecordDto,
            service_records::ServiceItemDto,
            service_records::CreateServiceRecordRequest,
            service_records::UpdateServiceRecordRequest,
            service_records::ServiceItemRequest,
            // Service types
            service_types::ServiceTypeDto,
            service_types::ServiceTypeRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Registration, login, token refresh and profile"),
        (name = "Vehicles", description = "Vehicle CRUD and allowed-energy-type management"),
        (name = "Energy Entries", description = "Fuel fill-up / charging session logging and statistics"),
        (name = "Service Records", description = "Maintenance events with billable line items"),
        (name = "Service Types", description = "User-defined maintenance categories"),
    ),
    info(
        title = "Carlog API",
        version = "1.0.0",
        description = "REST API for vehicle maintenance and energy consumption tracking",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    db: DatabaseConnection,
    jwt_config: JwtConfig,
    metrics_handle: PrometheusHandle,
) -> Router {
    // Repositories
    let user_repo = Arc::new(UserRepository::new(db.clone()));
    let refresh_token_repo = Arc::new(RefreshTokenRepository::new(db.clone()));
    let vehicle_repo = Arc::new(VehicleRepository::new(db.clone()));
    let energy_entry_repo = Arc::new(EnergyEntryRepository::new(db.clone()));
    let service_record_repo = Arc::new(ServiceRecordRepository::new(db.clone()));
    let service_type_repo = Arc::new(ServiceTypeRepository::new(db.clone()));

    // Services
    let identity_service = Arc::new(IdentityService::new(
        user_repo,
        refresh_token_repo,
        jwt_config.clone(),
    ));
    let vehicle_service = Arc::new(VehicleService::new(
        vehicle_repo.clone(),
        energy_entry_repo.clone(),
    ));
    let energy_service = Arc::new(EnergyEntryService::new(
        vehicle_repo.clone(),
        energy_entry_repo,
    ));
    let maintenance_service = Arc::new(MaintenanceService::new(
        vehicle_repo,
        service_record_repo,
        service_type_repo,
    ));

    let middleware_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    // ── Vehicles subtree (vehicles + energy entries + service records) ──
    let vehicle_unified = VehicleUnifiedState {
        vehicles: vehicles::VehicleHandlerState {
            vehicles: vehicle_service,
        },
        energy_entries: energy_entries::EnergyEntryHandlerState {
            entries: energy_service,
        },
        service_records: service_records::ServiceRecordHandlerState {
            maintenance: maintenance_service.clone(),
        },
        auth: middleware_state.clone(),
    };

    let vehicle_routes = Router::new()
        .route(
            "/",
            get(vehicles::list_vehicles).post(vehicles::create_vehicle),
        )
        .route(
            "/{vehicle_id}",
            get(vehicles::get_vehicle)
                .put(vehicles::update_vehicle)
                .delete(vehicles::delete_vehicle),
        )
        // --- Energy entries ---
        .route(
            "/{vehicle_id}/energy-entries",
            get(energy_entries::list_entries).post(energy_entries::create_entry),
        )
        .route(
            "/{vehicle_id}/energy-entries/stats",
            get(energy_entries::get_statistics),
        )
        .route(
            "/{vehicle_id}/energy-entries/{entry_id}",
            get(energy_entries::get_entry)
                .put(energy_entries::update_entry)
                .delete(energy_entries::delete_entry),
        )
        // --- Service records ---
        .route(
            "/{vehicle_id}/service-records",
            get(service_records::list_records).post(service_records::create_record),
        )
        .route(
            "/{vehicle_id}/service-records/{record_id}",
            get(service_records::get_record)
                .put(service_records::update_record)
                .delete(service_records::delete_record),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(vehicle_unified);

    // ── Auth routes ─────────────────────────────────────────────
    let auth_state = auth::AuthHandlerState {
        identity: identity_service,
    };

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .with_state(auth_state.clone());

    let auth_protected_routes = Router::new()
        .route("/me", get(auth::get_current_user).put(auth::update_profile))
        .route("/change-password", put(auth::change_password))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state);

    // ── Service types ───────────────────────────────────────────
    let service_type_state = service_types::ServiceTypeHandlerState {
        maintenance: maintenance_service,
    };
    let service_type_routes = Router::new()
        .route(
            "/",
            get(service_types::list_types).post(service_types::create_type),
        )
        .route(
            "/{type_id}",
            get(service_types::get_type)
                .put(service_types::update_type)
                .delete(service_types::delete_type),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(service_type_state);

    // ── Health / metrics ────────────────────────────────────────
    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };
    let metrics_state = metrics_module::MetricsState {
        handle: metrics_handle,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route(
            "/health",
            get(health::health_check).with_state(health_state),
        )
        .route(
            "/metrics",
            get(metrics_module::prometheus_metrics).with_state(metrics_state),
        )
        .nest("/api/v1/auth", auth_routes.merge(auth_protected_routes))
        .nest("/api/v1/vehicles", vehicle_routes)
        .nest("/api/v1/service-types", service_type_routes)
        .layer(middleware::from_fn(
            metrics_module::http_metrics_middleware,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
