//! Vehicle entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Powertrain category
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum EngineType {
    #[sea_orm(string_value = "fuel")]
    Fuel,
    #[sea_orm(string_value = "hybrid")]
    Hybrid,
    #[sea_orm(string_value = "plug_in_hybrid")]
    PlugInHybrid,
    #[sea_orm(string_value = "electric")]
    Electric,
    #[sea_orm(string_value = "hydrogen")]
    Hydrogen,
}

/// Vehicle model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub vin: Option<String>,
    pub engine_type: EngineType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::energy_entry::Entity")]
    EnergyEntries,
    #[sea_orm(has_many = "super::service_record::Entity")]
    ServiceRecords,
    #[sea_orm(has_many = "super::vehicle_energy_type::Entity")]
    VehicleEnergyTypes,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::energy_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EnergyEntries.def()
    }
}

impl Related<super::service_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceRecords.def()
    }
}

impl Related<super::vehicle_energy_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleEnergyTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
