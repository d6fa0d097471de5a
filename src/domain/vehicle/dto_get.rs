#[derive(Debug, Clone, Default)]
pub struct GetVehicleDto {
    /// Substring match over brand and model.
    pub search: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}
