use super::{EnergyType, EngineType};

#[derive(Debug, Clone)]
pub struct CreateVehicleDto {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub vin: Option<String>,
    pub engine_type: EngineType,
    /// Allowed energy types; defaults to everything the engine accepts.
    pub energy_types: Option<Vec<EnergyType>>,
}
