use chrono::{DateTime, Utc};

use super::EnergyUnit;
use crate::domain::vehicle::EnergyType;

/// Partial update; `cost` / `price_per_unit` use a double Option so a
/// request can clear a previously recorded value.
#[derive(Debug, Clone, Default)]
pub struct UpdateEnergyEntryDto {
    pub entry_date: Option<DateTime<Utc>>,
    pub mileage: Option<i64>,
    pub energy_type: Option<EnergyType>,
    pub energy_unit: Option<EnergyUnit>,
    pub volume: Option<f64>,
    pub cost: Option<Option<f64>>,
    pub price_per_unit: Option<Option<f64>>,
}
