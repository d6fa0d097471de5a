use super::{EnergyType, EngineType};

#[derive(Debug, Clone, Default)]
pub struct UpdateVehicleDto {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub vin: Option<String>,
    pub engine_type: Option<EngineType>,
    /// Full replacement set; `None` leaves the allowed types untouched.
    pub energy_types: Option<Vec<EnergyType>>,
}
