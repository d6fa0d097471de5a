use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::domain::{
    CreateVehicleDto, DomainError, DomainResult, EngineType, EnergyType, GetVehicleDto,
    UpdateVehicleDto, Vehicle, VehicleRepositoryInterface,
};
use crate::infrastructure::database::entities::{vehicle, vehicle_energy_type};
use crate::shared::{validate_pagination, PaginatedResult};

pub struct VehicleRepository {
    db: DatabaseConnection,
}

impl VehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_energy_types(&self, vehicle_id: &str) -> DomainResult<Vec<EnergyType>> {
        let rows = vehicle_energy_type::Entity::find()
            .filter(vehicle_energy_type::Column::VehicleId.eq(vehicle_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut types: Vec<EnergyType> = rows
            .into_iter()
            .map(|row| entity_energy_type_to_domain(row.energy_type))
            .collect();
        types.sort();

        Ok(types)
    }

    async fn to_domain(&self, model: vehicle::Model) -> DomainResult<Vehicle> {
        let energy_types = self.load_energy_types(&model.id).await?;
        Ok(vehicle_model_to_domain(model, energy_types))
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_engine_type_to_domain(engine_type: vehicle::EngineType) -> EngineType {
    match engine_type {
        vehicle::EngineType::Fuel => EngineType::Fuel,
        vehicle::EngineType::Hybrid => EngineType::Hybrid,
        vehicle::EngineType::PlugInHybrid => EngineType::PlugInHybrid,
        vehicle::EngineType::Electric => EngineType::Electric,
        vehicle::EngineType::Hydrogen => EngineType::Hydrogen,
    }
}

fn domain_engine_type_to_entity(engine_type: EngineType) -> vehicle::EngineType {
    match engine_type {
        EngineType::Fuel => vehicle::EngineType::Fuel,
        EngineType::Hybrid => vehicle::EngineType::Hybrid,
        EngineType::PlugInHybrid => vehicle::EngineType::PlugInHybrid,
        EngineType::Electric => vehicle::EngineType::Electric,
        EngineType::Hydrogen => vehicle::EngineType::Hydrogen,
    }
}

pub(super) fn entity_energy_type_to_domain(
    energy_type: vehicle_energy_type::EnergyType,
) -> EnergyType {
    match energy_type {
        vehicle_energy_type::EnergyType::Gasoline => EnergyType::Gasoline,
        vehicle_energy_type::EnergyType::Diesel => EnergyType::Diesel,
        vehicle_energy_type::EnergyType::Lpg => EnergyType::Lpg,
        vehicle_energy_type::EnergyType::Cng => EnergyType::Cng,
        vehicle_energy_type::EnergyType::Ethanol => EnergyType::Ethanol,
        vehicle_energy_type::EnergyType::Biofuel => EnergyType::Biofuel,
        vehicle_energy_type::EnergyType::Electric => EnergyType::Electric,
        vehicle_energy_type::EnergyType::Hydrogen => EnergyType::Hydrogen,
    }
}

pub(super) fn domain_energy_type_to_entity(
    energy_type: EnergyType,
) -> vehicle_energy_type::EnergyType {
    match energy_type {
        EnergyType::Gasoline => vehicle_energy_type::EnergyType::Gasoline,
        EnergyType::Diesel => vehicle_energy_type::EnergyType::Diesel,
        EnergyType::Lpg => vehicle_energy_type::EnergyType::Lpg,
        EnergyType::Cng => vehicle_energy_type::EnergyType::Cng,
        EnergyType::Ethanol => vehicle_energy_type::EnergyType::Ethanol,
        EnergyType::Biofuel => vehicle_energy_type::EnergyType::Biofuel,
        EnergyType::Electric => vehicle_energy_type::EnergyType::Electric,
        EnergyType::Hydrogen => vehicle_energy_type::EnergyType::Hydrogen,
    }
}

fn vehicle_model_to_domain(model: vehicle::Model, energy_types: Vec<EnergyType>) -> Vehicle {
    Vehicle {
        id: model.id,
        user_id: model.user_id,
        brand: model.brand,
        model: model.model,
        year: model.year,
        vin: model.vin,
        engine_type: entity_engine_type_to_domain(model.engine_type),
        energy_types,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Infra(e.into())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl VehicleRepositoryInterface for VehicleRepository {
    async fn create_vehicle(
        &self,
        user_id: &str,
        dto: CreateVehicleDto,
        energy_types: Vec<EnergyType>,
    ) -> DomainResult<Vehicle> {
        let now = Utc::now();
        let id = uuid::Uuid::new_v4().to_string();

        let new_vehicle = vehicle::ActiveModel {
            id: Set(id.clone()),
            user_id: Set(user_id.to_string()),
            brand: Set(dto.brand),
            model: Set(dto.model),
            year: Set(dto.year),
            vin: Set(dto.vin),
            engine_type: Set(domain_engine_type_to_entity(dto.engine_type)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = new_vehicle.insert(&self.db).await.map_err(db_err)?;

        self.replace_energy_types(&id, energy_types).await?;
        self.to_domain(model).await
    }

    async fn list_vehicles(
        &self,
        user_id: &str,
        dto: GetVehicleDto,
    ) -> DomainResult<PaginatedResult<Vehicle>> {
        let (page, page_size) = validate_pagination(dto.page, dto.page_size);

        let mut query = vehicle::Entity::find().filter(vehicle::Column::UserId.eq(user_id));

        if let Some(ref search) = dto.search {
            // lower() on both sides keeps the match case-insensitive on
            // Postgres, where plain LIKE is not.
            let pattern = format!("%{}%", search.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(Expr::expr(Func::lower(Expr::col(vehicle::Column::Brand))).like(&pattern))
                    .add(Expr::expr(Func::lower(Expr::col(vehicle::Column::Model))).like(&pattern)),
            );
        }

        query = query.order_by_desc(vehicle::Column::CreatedAt);

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

    async fn get_vehicle(&self, user_id: &str, id: &str) -> DomainResult<Option<Vehicle>> {
        let model = vehicle::Entity::find_by_id(id)
            .filter(vehicle::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match model {
            Some(model) => Ok(Some(self.to_domain(model).await?)),
            None => Ok(None),
        }
    }

    async fn update_vehicle(
        &self,
        user_id: &str,
        id: &str,
        dto: UpdateVehicleDto,
    ) -> DomainResult<Option<Vehicle>> {
        let existing = vehicle::Entity::find_by_id(id)
            .filter(vehicle::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: vehicle::ActiveModel = existing.into();

        if let Some(brand) = dto.brand {
            active.brand = Set(brand);
        }
        if let Some(model) = dto.model {
            active.model = Set(model);
        }
        if let Some(year) = dto.year {
            active.year = Set(year);
        }
        if let Some(vin) = dto.vin {
            active.vin = Set(Some(vin));
        }
        if let Some(engine_type) = dto.engine_type {
            active.engine_type = Set(domain_engine_type_to_entity(engine_type));
        }

        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;

        Ok(Some(self.to_domain(updated).await?))
    }

    async fn replace_energy_types(
        &self,
        vehicle_id: &str,
        energy_types: Vec<EnergyType>,
    ) -> DomainResult<()> {
        vehicle_energy_type::Entity::delete_many()
            .filter(vehicle_energy_type::Column::VehicleId.eq(vehicle_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if energy_types.is_empty() {
            return Ok(());
        }

        let rows: Vec<vehicle_energy_type::ActiveModel> = energy_types
            .into_iter()
            .map(|energy_type| vehicle_energy_type::ActiveModel {
                vehicle_id: Set(vehicle_id.to_string()),
                energy_type: Set(domain_energy_type_to_entity(energy_type)),
            })
            .collect();

        vehicle_energy_type::Entity::insert_many(rows)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn delete_vehicle(&self, user_id: &str, id: &str) -> DomainResult<bool> {
        let result = vehicle::Entity::delete_many()
            .filter(vehicle::Column::Id.eq(id))
            .filter(vehicle::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }
}
