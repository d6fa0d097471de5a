use chrono::{DateTime, Utc};

use super::EnergyUnit;
use crate::domain::vehicle::EnergyType;

#[derive(Debug, Clone)]
pub struct CreateEnergyEntryDto {
    pub entry_date: DateTime<Utc>,
    pub mileage: i64,
    pub energy_type: EnergyType,
    pub energy_unit: EnergyUnit,
    pub volume: f64,
    pub cost: Option<f64>,
    pub price_per_unit: Option<f64>,
}
