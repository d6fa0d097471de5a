//! Vehicle domain model and powertrain enums

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vehicle powertrain category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineType {
    Fuel,
    Hybrid,
    PlugInHybrid,
    Electric,
    Hydrogen,
}

impl EngineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineType::Fuel => "fuel",
            EngineType::Hybrid => "hybrid",
            EngineType::PlugInHybrid => "plug_in_hybrid",
            EngineType::Electric => "electric",
            EngineType::Hydrogen => "hydrogen",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fuel" => Some(EngineType::Fuel),
            "hybrid" => Some(EngineType::Hybrid),
            "plug_in_hybrid" => Some(EngineType::PlugInHybrid),
            "electric" => Some(EngineType::Electric),
            "hydrogen" => Some(EngineType::Hydrogen),
            _ => None,
        }
    }
}

/// Energy commodity a vehicle can consume.
///
/// Ordering of the variants is the display/reporting order, so derived
/// `Ord` is used when building distinct-type lists for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyType {
    Gasoline,
    Diesel,
    Lpg,
    Cng,
    Ethanol,
    Biofuel,
    Electric,
    Hydrogen,
}

impl EnergyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyType::Gasoline => "gasoline",
            EnergyType::Diesel => "diesel",
            EnergyType::Lpg => "lpg",
            EnergyType::Cng => "cng",
            EnergyType::Ethanol => "ethanol",
            EnergyType::Biofuel => "biofuel",
            EnergyType::Electric => "electric",
            EnergyType::Hydrogen => "hydrogen",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "gasoline" => Some(EnergyType::Gasoline),
            "diesel" => Some(EnergyType::Diesel),
            "lpg" => Some(EnergyType::Lpg),
            "cng" => Some(EnergyType::Cng),
            "ethanol" => Some(EnergyType::Ethanol),
            "biofuel" => Some(EnergyType::Biofuel),
            "electric" => Some(EnergyType::Electric),
            "hydrogen" => Some(EnergyType::Hydrogen),
            _ => None,
        }
    }

    /// Combustible commodities burned by fuel engines.
    pub fn is_fossil(&self) -> bool {
        !matches!(self, EnergyType::Electric | EnergyType::Hydrogen)
    }
}

/// Vehicle record, including the set of energy types its owner allowed
/// for logging (loaded from the `vehicle_energy_types` join table).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub user_id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub vin: Option<String>,
    pub engine_type: EngineType,
    pub energy_types: Vec<EnergyType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
