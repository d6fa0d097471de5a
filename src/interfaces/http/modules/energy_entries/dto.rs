//! Energy entry DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::energy::{UnitStatistics, VehicleEnergyStatistics};
use crate::domain::{DomainError, DomainResult, EnergyEntry, EnergyType, EnergyUnit};

use crate::interfaces::http::modules::vehicles::dto::parse_energy_type;

/// Energy entry API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnergyEntryDto {
    pub id: String,
    pub vehicle_id: String,
    pub entry_date: DateTime<Utc>,
    pub mileage: i64,
    pub energy_type: String,
    pub energy_unit: String,
    pub volume: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EnergyEntry> for EnergyEntryDto {
    fn from(e: EnergyEntry) -> Self {
        Self {
            id: e.id,
            vehicle_id: e.vehicle_id,
            entry_date: e.entry_date,
            mileage: e.mileage,
            energy_type: e.energy_type.as_str().to_string(),
            energy_unit: e.energy_unit.as_str().to_string(),
            volume: e.volume,
            cost: e.cost,
            price_per_unit: e.price_per_unit,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Create energy entry request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEnergyEntryRequest {
    pub entry_date: DateTime<Utc>,
    #[validate(range(min = 0))]
    pub mileage: i64,
    /// gasoline, diesel, lpg, cng, ethanol, biofuel, electric or hydrogen
    pub energy_type: String,
    /// liter, gallon, kilowatt_hour, kilogram or cubic_meter
    pub energy_unit: String,
    #[validate(range(min = 0.0001))]
    pub volume: f64,
    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,
    #[validate(range(min = 0.0))]
    pub price_per_unit: Option<f64>,
}

/// Update energy entry request. `cost` and `price_per_unit` distinguish
/// "absent" (left untouched) from `null` (cleared).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEnergyEntryRequest {
    pub entry_date: Option<DateTime<Utc>>,
    #[validate(range(min = 0))]
    pub mileage: Option<i64>,
    pub energy_type: Option<String>,
    pub energy_unit: Option<String>,
    #[validate(range(min = 0.0001))]
    pub volume: Option<f64>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<f64>)]
    pub cost: Option<Option<f64>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<f64>)]
    pub price_per_unit: Option<Option<f64>>,
}

/// List entries query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListEnergyEntriesParams {
    /// Comma-separated energy type filter, e.g. `gasoline,ethanol`
    pub energy_types: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

/// Statistics query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct StatisticsParams {
    /// Comma-separated energy type filter
    pub energy_types: Option<String>,
}

/// Per-unit statistics
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UnitStatisticsDto {
    pub unit: String,
    pub entry_count: usize,
    pub energy_types: Vec<String>,
    pub average_consumption: f64,
    pub total_volume: f64,
    pub total_cost: f64,
    pub average_price_per_unit: f64,
    pub average_cost_per_100km: f64,
}

impl From<UnitStatistics> for UnitStatisticsDto {
    fn from(s: UnitStatistics) -> Self {
        Self {
            unit: s.unit.as_str().to_string(),
            entry_count: s.entry_count,
            energy_types: s.energy_types.iter().map(|t| t.as_str().to_string()).collect(),
            average_consumption: s.average_consumption,
            total_volume: s.total_volume,
            total_cost: s.total_cost,
            average_price_per_unit: s.average_price_per_unit,
            average_cost_per_100km: s.average_cost_per_100km,
        }
    }
}

/// Vehicle-level statistics rollup
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehicleEnergyStatisticsDto {
    pub units: Vec<UnitStatisticsDto>,
    pub total_entries: usize,
    pub total_cost: f64,
}

impl From<VehicleEnergyStatistics> for VehicleEnergyStatisticsDto {
    fn from(s: VehicleEnergyStatistics) -> Self {
        Self {
            units: s.units.into_iter().map(UnitStatisticsDto::from).collect(),
            total_entries: s.total_entries,
            total_cost: s.total_cost,
        }
    }
}

pub fn parse_energy_unit(s: &str) -> DomainResult<EnergyUnit> {
    EnergyUnit::parse(s)
        .ok_or_else(|| DomainError::Validation(format!("Unknown energy unit '{}'", s)))
}

/// Parse a comma-separated energy type filter. Empty input means no
/// restriction.
pub fn parse_type_filter(raw: Option<&str>) -> DomainResult<Option<Vec<EnergyType>>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let types: Vec<EnergyType> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_energy_type)
        .collect::<DomainResult<_>>()?;

    Ok(if types.is_empty() { None } else { Some(types) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_filter_splits_and_trims() {
        let parsed = parse_type_filter(Some("gasoline, ethanol")).unwrap().unwrap();
        assert_eq!(parsed, vec![EnergyType::Gasoline, EnergyType::Ethanol]);
    }

    #[test]
    fn empty_filter_means_no_restriction() {
        assert!(parse_type_filter(None).unwrap().is_none());
        assert!(parse_type_filter(Some("")).unwrap().is_none());
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(parse_type_filter(Some("plutonium")).is_err());
    }
}
