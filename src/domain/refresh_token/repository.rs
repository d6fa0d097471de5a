use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::RefreshToken;
use crate::shared::DomainResult;

#[derive(Debug, Clone)]
pub struct CreateRefreshTokenDto {
    pub user_id: String,
    pub token_hash: String,
    pub device_name: Option<String>,
    pub user_agent: Option<String>,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait RefreshTokenRepositoryInterface: Send + Sync {
    async fn insert_token(&self, dto: CreateRefreshTokenDto) -> DomainResult<RefreshToken>;
    async fn find_by_hash(&self, token_hash: &str) -> DomainResult<Option<RefreshToken>>;
    async fn revoke_token(&self, id: &str) -> DomainResult<()>;
    async fn revoke_all_for_user(&self, user_id: &str) -> DomainResult<u64>;
    /// Housekeeping: drop tokens that expired before `cutoff`.
    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> DomainResult<u64>;
}
