use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{DomainError, DomainResult, ServiceType, ServiceTypeRepositoryInterface};
use crate::infrastructure::database::entities::service_type;

pub struct ServiceTypeRepository {
    db: DatabaseConnection,
}

impl ServiceTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn type_model_to_domain(model: service_type::Model) -> ServiceType {
    ServiceType {
        id: model.id,
        user_id: model.user_id,
        name: model.name,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Infra(e.into())
}

fn unique_violation(e: sea_orm::DbErr) -> DomainError {
    if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
        DomainError::Conflict("Service type name already exists".to_string())
    } else {
        db_err(e)
    }
}

#[async_trait]
impl ServiceTypeRepositoryInterface for ServiceTypeRepository {
    async fn create_type(&self, user_id: &str, name: &str) -> DomainResult<ServiceType> {
        let now = Utc::now();

        let new_type = service_type::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_string()),
            name: Set(name.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = new_type.insert(&self.db).await.map_err(unique_violation)?;

        Ok(type_model_to_domain(model))
    }

    async fn list_types(&self, user_id: &str) -> DomainResult<Vec<ServiceType>> {
        let models = service_type::Entity::find()
            .filter(service_type::Column::UserId.eq(user_id))
            .order_by_asc(service_type::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(type_model_to_domain).collect())
    }

    async fn get_type(&self, user_id: &str, id: &str) -> DomainResult<Option<ServiceType>> {
        let model = service_type::Entity::find_by_id(id)
            .filter(service_type::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(type_model_to_domain))
    }

    async fn update_type(
        &self,
        user_id: &str,
        id: &str,
        name: &str,
    ) -> DomainResult<Option<ServiceType>> {
        let existing = service_type::Entity::find_by_id(id)
            .filter(service_type::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: service_type::ActiveModel = existing.into();
        active.name = Set(name.to_string());
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(unique_violation)?;

        Ok(Some(type_model_to_domain(updated)))
    }

    async fn delete_type(&self, user_id: &str, id: &str) -> DomainResult<bool> {
        let result = service_type::Entity::delete_many()
            .filter(service_type::Column::Id.eq(id))
            .filter(service_type::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }
}
