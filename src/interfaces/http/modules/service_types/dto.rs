//! Service type DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::ServiceType;

/// Service type API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceTypeDto {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ServiceType> for ServiceTypeDto {
    fn from(t: ServiceType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Create / rename service type request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ServiceTypeRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}
