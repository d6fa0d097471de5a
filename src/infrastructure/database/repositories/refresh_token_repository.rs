use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::domain::{
    CreateRefreshTokenDto, DomainError, DomainResult, RefreshToken,
    RefreshTokenRepositoryInterface,
};
use crate::infrastructure::database::entities::refresh_token;

pub struct RefreshTokenRepository {
    db: DatabaseConnection,
}

impl RefreshTokenRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn token_model_to_domain(model: refresh_token::Model) -> RefreshToken {
    RefreshToken {
        id: model.id,
        user_id: model.user_id,
        token_hash: model.token_hash,
        device_name: model.device_name,
        user_agent: model.user_agent,
        expires_at: model.expires_at,
        revoked_at: model.revoked_at,
        created_at: model.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Infra(e.into())
}

#[async_trait]
impl RefreshTokenRepositoryInterface for RefreshTokenRepository {
    async fn insert_token(&self, dto: CreateRefreshTokenDto) -> DomainResult<RefreshToken> {
        let new_token = refresh_token::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            user_id: Set(dto.user_id),
            token_hash: Set(dto.token_hash),
            device_name: Set(dto.device_name),
            user_agent: Set(dto.user_agent),
            expires_at: Set(dto.expires_at),
            revoked_at: Set(None),
            created_at: Set(Utc::now()),
        };

        let model = new_token.insert(&self.db).await.map_err(db_err)?;

        Ok(token_model_to_domain(model))
    }

    async fn find_by_hash(&self, token_hash: &str) -> DomainResult<Option<RefreshToken>> {
        let model = refresh_token::Entity::find()
            .filter(refresh_token::Column::TokenHash.eq(token_hash))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(token_model_to_domain))
    }

    async fn revoke_token(&self, id: &str) -> DomainResult<()> {
        let existing = refresh_token::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(());
        };

        let mut active: refresh_token::ActiveModel = existing.into();
        active.revoked_at = Set(Some(Utc::now()));
        active.update(&self.db).await.map_err(db_err)?;

        Ok(())
    }

    async fn revoke_all_for_user(&self, user_id: &str) -> DomainResult<u64> {
        let result = refresh_token::Entity::update_many()
            .col_expr(
                refresh_token::Column::RevokedAt,
                sea_orm::sea_query::Expr::value(Some(Utc::now())),
            )
            .filter(refresh_token::Column::UserId.eq(user_id))
            .filter(refresh_token::Column::RevokedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected)
    }

    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> DomainResult<u64> {
        let result = refresh_token::Entity::delete_many()
            .filter(refresh_token::Column::ExpiresAt.lt(cutoff))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected)
    }
}
