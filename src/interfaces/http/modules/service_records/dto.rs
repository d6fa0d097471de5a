//! Service record DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{
    CreateServiceItemDto, DomainError, DomainResult, ServiceItem, ServiceItemKind, ServiceRecord,
};

/// Line item API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceItemDto {
    pub id: String,
    pub kind: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: f64,
    pub line_total: f64,
}

impl From<ServiceItem> for ServiceItemDto {
    fn from(i: ServiceItem) -> Self {
        let line_total = i.line_total();
        Self {
            id: i.id,
            kind: i.kind.as_str().to_string(),
            name: i.name,
            unit_price: i.unit_price,
            quantity: i.quantity,
            line_total,
        }
    }
}

/// Service record API representation. `total_cost` is computed: line
/// items win over the manual cost.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceRecordDto {
    pub id: String,
    pub vehicle_id: String,
    pub service_type_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub mileage: i64,
    pub service_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_cost: Option<f64>,
    pub total_cost: f64,
    pub items: Vec<ServiceItemDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ServiceRecord> for ServiceRecordDto {
    fn from(r: ServiceRecord) -> Self {
        let total_cost = r.total_cost();
        Self {
            id: r.id,
            vehicle_id: r.vehicle_id,
            service_type_id: r.service_type_id,
            title: r.title,
            notes: r.notes,
            mileage: r.mileage,
            service_date: r.service_date,
            manual_cost: r.manual_cost,
            total_cost,
            items: r.items.into_iter().map(ServiceItemDto::from).collect(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Line item in a create/update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ServiceItemRequest {
    /// part, labor, tax or other
    pub kind: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
    #[validate(range(min = 0.0001))]
    pub quantity: f64,
}

/// Create service record request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateServiceRecordRequest {
    pub service_type_id: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
    #[validate(range(min = 0))]
    pub mileage: i64,
    pub service_date: DateTime<Utc>,
    #[validate(range(min = 0.0))]
    pub manual_cost: Option<f64>,
    #[validate(nested)]
    #[serde(default)]
    pub items: Vec<ServiceItemRequest>,
}

/// Update service record request. `notes` and `manual_cost` distinguish
/// "absent" from `null`; `items`, when present, replaces the line items
/// wholesale.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateServiceRecordRequest {
    pub service_type_id: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
    #[validate(range(min = 0))]
    pub mileage: Option<i64>,
    pub service_date: Option<DateTime<Utc>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<f64>)]
    pub manual_cost: Option<Option<f64>>,
    #[validate(nested)]
    pub items: Option<Vec<ServiceItemRequest>>,
}

/// List service records query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListServiceRecordsParams {
    /// Substring search over title and notes
    pub search: Option<String>,
    /// Inclusive lower bound on service date
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on service date
    pub date_to: Option<DateTime<Utc>>,
    /// servicedate (default), mileage, title or totalcost
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_desc: bool,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

pub fn parse_item_kind(s: &str) -> DomainResult<ServiceItemKind> {
    ServiceItemKind::parse(s)
        .ok_or_else(|| DomainError::Validation(format!("Unknown item kind '{}'", s)))
}

pub fn parse_items(items: Vec<ServiceItemRequest>) -> DomainResult<Vec<CreateServiceItemDto>> {
    items
        .into_iter()
        .map(|item| {
            Ok(CreateServiceItemDto {
                kind: parse_item_kind(&item.kind)?,
                name: item.name,
                unit_price: item.unit_price,
                quantity: item.quantity,
            })
        })
        .collect()
}
