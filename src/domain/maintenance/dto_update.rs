use chrono::{DateTime, Utc};

use super::CreateServiceItemDto;

/// Partial update. When `items` is `Some`, the record's line items are
/// replaced wholesale (the old ones are deleted).
#[derive(Debug, Clone, Default)]
pub struct UpdateServiceRecordDto {
    pub service_type_id: Option<String>,
    pub title: Option<String>,
    pub notes: Option<Option<String>>,
    pub mileage: Option<i64>,
    pub service_date: Option<DateTime<Utc>>,
    pub manual_cost: Option<Option<f64>>,
    pub items: Option<Vec<CreateServiceItemDto>>,
}
