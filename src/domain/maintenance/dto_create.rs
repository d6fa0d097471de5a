use chrono::{DateTime, Utc};

use super::ServiceItemKind;

#[derive(Debug, Clone)]
pub struct CreateServiceItemDto {
    pub kind: ServiceItemKind,
    pub name: String,
    pub unit_price: f64,
    pub quantity: f64,
}

#[derive(Debug, Clone)]
pub struct CreateServiceRecordDto {
    pub service_type_id: String,
    pub title: String,
    pub notes: Option<String>,
    pub mileage: i64,
    pub service_date: DateTime<Utc>,
    pub manual_cost: Option<f64>,
    pub items: Vec<CreateServiceItemDto>,
}
