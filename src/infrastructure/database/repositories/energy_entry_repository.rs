use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::domain::{
    CreateEnergyEntryDto, DomainError, DomainResult, EnergyEntry,
    EnergyEntryRepositoryInterface, EnergyType, EnergyUnit, GetEnergyEntryDto,
    UpdateEnergyEntryDto,
};
use crate::infrastructure::database::entities::energy_entry;
use crate::shared::{validate_pagination, PaginatedResult};

use super::vehicle_repository::{domain_energy_type_to_entity, entity_energy_type_to_domain};

pub struct EnergyEntryRepository {
    db: DatabaseConnection,
}

impl EnergyEntryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_unit_to_domain(unit: energy_entry::EnergyUnit) -> EnergyUnit {
    match unit {
        energy_entry::EnergyUnit::Liter => EnergyUnit::Liter,
        energy_entry::EnergyUnit::Gallon => EnergyUnit::Gallon,
        energy_entry::EnergyUnit::KilowattHour => EnergyUnit::KilowattHour,
        energy_entry::EnergyUnit::Kilogram => EnergyUnit::Kilogram,
        energy_entry::EnergyUnit::CubicMeter => EnergyUnit::CubicMeter,
    }
}

fn domain_unit_to_entity(unit: EnergyUnit) -> energy_entry::EnergyUnit {
    match unit {
        EnergyUnit::Liter => energy_entry::EnergyUnit::Liter,
        EnergyUnit::Gallon => energy_entry::EnergyUnit::Gallon,
        EnergyUnit::KilowattHour => energy_entry::EnergyUnit::KilowattHour,
        EnergyUnit::Kilogram => energy_entry::EnergyUnit::Kilogram,
        EnergyUnit::CubicMeter => energy_entry::EnergyUnit::CubicMeter,
    }
}

fn entry_model_to_domain(model: energy_entry::Model) -> EnergyEntry {
    EnergyEntry {
        id: model.id,
        vehicle_id: model.vehicle_id,
        entry_date: model.entry_date,
        mileage: model.mileage,
        energy_type: entity_energy_type_to_domain(model.energy_type),
        energy_unit: entity_unit_to_domain(model.energy_unit),
        volume: model.volume,
        cost: model.cost,
        price_per_unit: model.price_per_unit,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Infra(e.into())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl EnergyEntryRepositoryInterface for EnergyEntryRepository {
    async fn create_entry(
        &self,
        vehicle_id: &str,
        dto: CreateEnergyEntryDto,
    ) -> DomainResult<EnergyEntry> {
        let now = Utc::now();
        let id = uuid::Uuid::new_v4().to_string();

        let new_entry = energy_entry::ActiveModel {
            id: Set(id),
            vehicle_id: Set(vehicle_id.to_string()),
            entry_date: Set(dto.entry_date),
            mileage: Set(dto.mileage),
            energy_type: Set(domain_energy_type_to_entity(dto.energy_type)),
            energy_unit: Set(domain_unit_to_entity(dto.energy_unit)),
            volume: Set(dto.volume),
            cost: Set(dto.cost),
            price_per_unit: Set(dto.price_per_unit),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = new_entry.insert(&self.db).await.map_err(db_err)?;

        Ok(entry_model_to_domain(model))
    }

    async fn list_entries(
        &self,
        vehicle_id: &str,
        dto: GetEnergyEntryDto,
    ) -> DomainResult<PaginatedResult<EnergyEntry>> {
        let (page, page_size) = validate_pagination(dto.page, dto.page_size);

        let mut query =
            energy_entry::Entity::find().filter(energy_entry::Column::VehicleId.eq(vehicle_id));

        // An empty type list means no restriction.
        if let Some(ref energy_types) = dto.energy_types {
            if !energy_types.is_empty() {
                let entity_types: Vec<energy_entry::EnergyType> = energy_types
                    .iter()
                    .map(|t| domain_energy_type_to_entity(*t))
                    .collect();
                query = query.filter(energy_entry::Column::EnergyType.is_in(entity_types));
            }
        }

        query = query
            .order_by_desc(energy_entry::Column::EntryDate)
            .order_by_desc(energy_entry::Column::Mileage);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let offset = (page - 1) * page_size;
        let models = query
            .offset(offset)
            .limit(page_size)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items: Vec<EnergyEntry> = models.into_iter().map(entry_model_to_domain).collect();

        Ok(PaginatedResult::new(items, total, page, page_size))
    }

    async fn list_all_entries(&self, vehicle_id: &str) -> DomainResult<Vec<EnergyEntry>> {
        let models = energy_entry::Entity::find()
            .filter(energy_entry::Column::VehicleId.eq(vehicle_id))
            .order_by_asc(energy_entry::Column::Mileage)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(entry_model_to_domain).collect())
    }

    async fn get_entry(&self, vehicle_id: &str, id: &str) -> DomainResult<Option<EnergyEntry>> {
        let model = energy_entry::Entity::find_by_id(id)
            .filter(energy_entry::Column::VehicleId.eq(vehicle_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(entry_model_to_domain))
    }

    async fn update_entry(
        &self,
        vehicle_id: &str,
        id: &str,
        dto: UpdateEnergyEntryDto,
    ) -> DomainResult<Option<EnergyEntry>> {
        let existing = energy_entry::Entity::find_by_id(id)
            .filter(energy_entry::Column::VehicleId.eq(vehicle_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: energy_entry::ActiveModel = existing.into();

        if let Some(entry_date) = dto.entry_date {
            active.entry_date = Set(entry_date);
        }
        if let Some(mileage) = dto.mileage {
            active.mileage = Set(mileage);
        }
        if let Some(energy_type) = dto.energy_type {
            active.energy_type = Set(domain_energy_type_to_entity(energy_type));
        }
        if let Some(energy_unit) = dto.energy_unit {
            active.energy_unit = Set(domain_unit_to_entity(energy_unit));
        }
        if let Some(volume) = dto.volume {
            active.volume = Set(volume);
        }
        if let Some(cost) = dto.cost {
            active.cost = Set(cost);
        }
        if let Some(price_per_unit) = dto.price_per_unit {
            active.price_per_unit = Set(price_per_unit);
        }

        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;

        Ok(Some(entry_model_to_domain(updated)))
    }

    async fn delete_entry(&self, vehicle_id: &str, id: &str) -> DomainResult<bool> {
        let result = energy_entry::Entity::delete_many()
            .filter(energy_entry::Column::Id.eq(id))
            .filter(energy_entry::Column::VehicleId.eq(vehicle_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn count_entries_by_types(
        &self,
        vehicle_id: &str,
        energy_types: &[EnergyType],
    ) -> DomainResult<u64> {
        if energy_types.is_empty() {
            return Ok(0);
        }

        let entity_types: Vec<energy_entry::EnergyType> = energy_types
            .iter()
            .map(|t| domain_energy_type_to_entity(*t))
            .collect();

        energy_entry::Entity::find()
            .filter(energy_entry::Column::VehicleId.eq(vehicle_id))
            .filter(energy_entry::Column::EnergyType.is_in(entity_types))
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}
