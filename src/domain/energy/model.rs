//! Energy entry domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::vehicle::EnergyType;

/// Measurement unit for a logged volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyUnit {
    Liter,
    Gallon,
    KilowattHour,
    Kilogram,
    CubicMeter,
}

impl EnergyUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyUnit::Liter => "liter",
            EnergyUnit::Gallon => "gallon",
            EnergyUnit::KilowattHour => "kilowatt_hour",
            EnergyUnit::Kilogram => "kilogram",
            EnergyUnit::CubicMeter => "cubic_meter",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "liter" => Some(EnergyUnit::Liter),
            "gallon" => Some(EnergyUnit::Gallon),
            "kilowatt_hour" => Some(EnergyUnit::KilowattHour),
            "kilogram" => Some(EnergyUnit::Kilogram),
            "cubic_meter" => Some(EnergyUnit::CubicMeter),
            _ => None,
        }
    }
}

/// A fuel fill-up or charging session log row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyEntry {
    pub id: String,
    pub vehicle_id: String,
    pub entry_date: DateTime<Utc>,
    pub mileage: i64,
    pub energy_type: EnergyType,
    pub energy_unit: EnergyUnit,
    pub volume: f64,
    /// Total paid; `None` when the user did not record it.
    pub cost: Option<f64>,
    pub price_per_unit: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
