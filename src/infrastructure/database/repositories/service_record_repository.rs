use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::domain::{
    CreateServiceItemDto, CreateServiceRecordDto, DomainError, DomainResult, GetServiceRecordDto,
    ServiceItem, ServiceItemKind, ServiceRecord, ServiceRecordRepositoryInterface,
    ServiceRecordSortField, UpdateServiceRecordDto,
};
use crate::infrastructure::database::entities::{service_item, service_record};
use crate::shared::{validate_pagination, PaginatedResult};

pub struct ServiceRecordRepository {
    db: DatabaseConnection,
}

impl ServiceRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_items(&self, record_id: &str) -> DomainResult<Vec<ServiceItem>> {
        let rows = service_item::Entity::find()
            .filter(service_item::Column::ServiceRecordId.eq(record_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(item_model_to_domain).collect())
    }

    async fn insert_items(
        &self,
        record_id: &str,
        items: Vec<CreateServiceItemDto>,
    ) -> DomainResult<()> {
        if items.is_empty() {
            return Ok(());
        }

        let rows: Vec<service_item::ActiveModel> = items
            .into_iter()
            .map(|item| service_item::ActiveModel {
                id: Set(uuid::Uuid::new_v4().to_string()),
                service_record_id: Set(record_id.to_string()),
                kind: Set(domain_kind_to_entity(item.kind)),
                name: Set(item.name),
                unit_price: Set(item.unit_price),
                quantity: Set(item.quantity),
            })
            .collect();

        service_item::Entity::insert_many(rows)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn to_domain(&self, model: service_record::Model) -> DomainResult<ServiceRecord> {
        let items = self.load_items(&model.id).await?;
        Ok(record_model_to_domain(model, items))
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_kind_to_domain(kind: service_item::ServiceItemKind) -> ServiceItemKind {
    match kind {
        service_item::ServiceItemKind::Part => ServiceItemKind::Part,
        service_item::ServiceItemKind::Labor => ServiceItemKind::Labor,
        service_item::ServiceItemKind::Tax => ServiceItemKind::Tax,
        service_item::ServiceItemKind::Other => ServiceItemKind::Other,
    }
}

fn domain_kind_to_entity(kind: ServiceItemKind) -> service_item::ServiceItemKind {
    match kind {
        ServiceItemKind::Part => service_item::ServiceItemKind::Part,
        ServiceItemKind::Labor => service_item::ServiceItemKind::Labor,
        ServiceItemKind::Tax => service_item::ServiceItemKind::Tax,
        ServiceItemKind::Other => service_item::ServiceItemKind::Other,
    }
}

fn item_model_to_domain(model: service_item::Model) -> ServiceItem {
    ServiceItem {
        id: model.id,
        service_record_id: model.service_record_id,
        kind: entity_kind_to_domain(model.kind),
        name: model.name,
        unit_price: model.unit_price,
        quantity: model.quantity,
    }
}

fn record_model_to_domain(model: service_record::Model, items: Vec<ServiceItem>) -> ServiceRecord {
    ServiceRecord {
        id: model.id,
        vehicle_id: model.vehicle_id,
        service_type_id: model.service_type_id,
        title: model.title,
        notes: model.notes,
        mileage: model.mileage,
        service_date: model.service_date,
        manual_cost: model.manual_cost,
        items,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Infra(e.into())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl ServiceRecordRepositoryInterface for ServiceRecordRepository {
    async fn create_record(
        &self,
        vehicle_id: &str,
        dto: CreateServiceRecordDto,
    ) -> DomainResult<ServiceRecord> {
        let now = Utc::now();
        let id = uuid::Uuid::new_v4().to_string();

        let new_record = service_record::ActiveModel {
            id: Set(id.clone()),
            vehicle_id: Set(vehicle_id.to_string()),
            service_type_id: Set(dto.service_type_id),
            title: Set(dto.title),
            notes: Set(dto.notes),
            mileage: Set(dto.mileage),
            service_date: Set(dto.service_date),
            manual_cost: Set(dto.manual_cost),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = new_record.insert(&self.db).await.map_err(db_err)?;

        self.insert_items(&id, dto.items).await?;
        self.to_domain(model).await
    }

    async fn list_records(
        &self,
        vehicle_id: &str,
        dto: GetServiceRecordDto,
    ) -> DomainResult<PaginatedResult<ServiceRecord>> {
        let (page, page_size) = validate_pagination(dto.page, dto.page_size);

        let mut query = service_record::Entity::find()
            .filter(service_record::Column::VehicleId.eq(vehicle_id));

        if let Some(ref search) = dto.search {
            // lower() on both sides keeps the match case-insensitive on
            // Postgres, where plain LIKE is not.
            let pattern = format!("%{}%", search.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(service_record::Column::Title)))
                            .like(&pattern),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(service_record::Column::Notes)))
                            .like(&pattern),
                    ),
            );
        }
        if let Some(date_from) = dto.date_from {
            query = query.filter(service_record::Column::ServiceDate.gte(date_from));
        }
        if let Some(date_to) = dto.date_to {
            query = query.filter(service_record::Column::ServiceDate.lte(date_to));
        }

        let sort_field = dto
            .sort_by
            .as_deref()
            .map(ServiceRecordSortField::parse)
            .unwrap_or(ServiceRecordSortField::ServiceDate);

        // Total cost is computed from line items, so the database orders
        // by the default field and the caller re-sorts the page.
        query = match (sort_field, dto.sort_descending) {
            (ServiceRecordSortField::Mileage, false) => {
                query.order_by_asc(service_record::Column::Mileage)
            }
            (ServiceRecordSortField::Mileage, true) => {
                query.order_by_desc(service_record::Column::Mileage)
            }
            (ServiceRecordSortField::Title, false) => {
                query.order_by_asc(service_record::Column::Title)
            }
            (ServiceRecordSortField::Title, true) => {
                query.order_by_desc(service_record::Column::Title)
            }
            (ServiceRecordSortField::ServiceDate, false) => {
                query.order_by_asc(service_record::Column::ServiceDate)
            }
            (ServiceRecordSortField::ServiceDate, true)
            | (ServiceRecordSortField::TotalCost, _) => {
                query.order_by_desc(service_record::Column::ServiceDate)
            }
        };

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let offset = (page - 1) * page_size;
        let models = query
            .offset(offset)
            .limit(page_size)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut items = Vec::with_capacity(models.len());
        for model in models {
            items.push(self.to_domain(model).await?);
        }

        Ok(PaginatedResult::new(items, total, page, page_size))
    }

    async fn get_record(&self, vehicle_id: &str, id: &str) -> DomainResult<Option<ServiceRecord>> {
        let model = service_record::Entity::find_by_id(id)
            .filter(service_record::Column::VehicleId.eq(vehicle_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match model {
            Some(model) => Ok(Some(self.to_domain(model).await?)),
            None => Ok(None),
        }
    }

    async fn update_record(
        &self,
        vehicle_id: &str,
        id: &str,
        dto: UpdateServiceRecordDto,
    ) -> DomainResult<Option<ServiceRecord>> {
        let existing = service_record::Entity::find_by_id(id)
            .filter(service_record::Column::VehicleId.eq(vehicle_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: service_record::ActiveModel = existing.into();

        if let Some(service_type_id) = dto.service_type_id {
            active.service_type_id = Set(service_type_id);
        }
        if let Some(title) = dto.title {
            active.title = Set(title);
        }
        if let Some(notes) = dto.notes {
            active.notes = Set(notes);
        }
        if let Some(mileage) = dto.mileage {
            active.mileage = Set(mileage);
        }
        if let Some(service_date) = dto.service_date {
            active.service_date = Set(service_date);
        }
        if let Some(manual_cost) = dto.manual_cost {
            active.manual_cost = Set(manual_cost);
        }

        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;

        // Line items are replaced wholesale when present in the update.
        if let Some(items) = dto.items {
            service_item::Entity::delete_many()
                .filter(service_item::Column::ServiceRecordId.eq(id))
                .exec(&self.db)
                .await
                .map_err(db_err)?;
            self.insert_items(id, items).await?;
        }

        Ok(Some(self.to_domain(updated).await?))
    }

    async fn delete_record(&self, vehicle_id: &str, id: &str) -> DomainResult<bool> {
        // Items cascade through the foreign key.
        let result = service_record::Entity::delete_many()
            .filter(service_record::Column::Id.eq(id))
            .filter(service_record::Column::VehicleId.eq(vehicle_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn count_records_by_service_type(&self, service_type_id: &str) -> DomainResult<u64> {
        service_record::Entity::find()
            .filter(service_record::Column::ServiceTypeId.eq(service_type_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}
