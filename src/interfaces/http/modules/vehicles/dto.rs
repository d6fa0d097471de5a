//! Vehicle DTOs
//!
//! Engine and energy types travel as snake_case strings on the wire and
//! are parsed into the domain enums at the handler boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{DomainError, DomainResult, EngineType, EnergyType, Vehicle};

/// Vehicle API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    pub engine_type: String,
    pub energy_types: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleDto {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.id,
            brand: v.brand,
            model: v.model,
            year: v.year,
            vin: v.vin,
            engine_type: v.engine_type.as_str().to_string(),
            energy_types: v
                .energy_types
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

/// Create vehicle request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 80))]
    pub brand: String,
    #[validate(length(min = 1, max = 80))]
    pub model: String,
    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
    #[validate(length(max = 17))]
    pub vin: Option<String>,
    /// fuel, hybrid, plug_in_hybrid, electric or hydrogen
    pub engine_type: String,
    /// Allowed energy types; defaults to everything the engine accepts
    pub energy_types: Option<Vec<String>>,
}

/// Update vehicle request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 80))]
    pub brand: Option<String>,
    #[validate(length(min = 1, max = 80))]
    pub model: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
    #[validate(length(max = 17))]
    pub vin: Option<String>,
    pub engine_type: Option<String>,
    /// Full replacement set for the allowed energy types
    pub energy_types: Option<Vec<String>>,
}

/// List vehicles query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListVehiclesParams {
    /// Substring search over brand and model
    pub search: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

pub fn parse_engine_type(s: &str) -> DomainResult<EngineType> {
    EngineType::parse(s)
        .ok_or_else(|| DomainError::Validation(format!("Unknown engine type '{}'", s)))
}

pub fn parse_energy_type(s: &str) -> DomainResult<EnergyType> {
    EnergyType::parse(s)
        .ok_or_else(|| DomainError::Validation(format!("Unknown energy type '{}'", s)))
}

pub fn parse_energy_types(values: &[String]) -> DomainResult<Vec<EnergyType>> {
    values.iter().map(|s| parse_energy_type(s)).collect()
}
