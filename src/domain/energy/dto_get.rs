use crate::domain::vehicle::EnergyType;

#[derive(Debug, Clone, Default)]
pub struct GetEnergyEntryDto {
    /// Empty or `None` means no type restriction.
    pub energy_types: Option<Vec<EnergyType>>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}
