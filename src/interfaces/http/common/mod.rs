//! Common API envelopes and error mapping

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::shared::PaginatedResult;

/// Standard response wrapper.
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "error": "message"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Empty response for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// Paginated list envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<T> PaginatedResponse<T> {
    pub fn from_result<U, F>(result: PaginatedResult<U>, map: F) -> Self
    where
        F: Fn(U) -> T,
    {
        let has_next_page = result.has_next_page();
        let has_previous_page = result.has_previous_page();
        Self {
            items: result.items.into_iter().map(map).collect(),
            total: result.total,
            page: result.page,
            page_size: result.page_size,
            total_pages: result.total_pages,
            has_next_page,
            has_previous_page,
        }
    }
}

/// Map a domain error to the HTTP status it travels with.
pub fn domain_error_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) | DomainError::EnergyTypeInUse { .. } => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::MileageOutOfOrder { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Infra(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Uniform error tuple for handler `Result` returns.
pub fn error_response<T>(error: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        domain_error_status(&error),
        Json(ApiResponse::error(error.to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kinds() {
        assert_eq!(
            domain_error_status(&DomainError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            domain_error_status(&DomainError::EnergyTypeInUse {
                types: vec!["diesel".into()],
                entry_count: 3
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            domain_error_status(&DomainError::MileageOutOfOrder { mileage: 10 }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            domain_error_status(&DomainError::Infra(
                crate::shared::InfraError::Crypto("hash".into())
            )),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn paginated_envelope_carries_page_flags() {
        let result = PaginatedResult::new((0..10).collect::<Vec<i32>>(), 15, 1, 10);
        let resp = PaginatedResponse::from_result(result, |v| v * 2);
        assert_eq!(resp.items.len(), 10);
        assert_eq!(resp.total_pages, 2);
        assert!(resp.has_next_page);
        assert!(!resp.has_previous_page);
    }
}
