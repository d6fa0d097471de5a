//! Vehicle allowed-energy-type join table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Energy commodity
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum EnergyType {
    #[sea_orm(string_value = "gasoline")]
    Gasoline,
    #[sea_orm(string_value = "diesel")]
    Diesel,
    #[sea_orm(string_value = "lpg")]
    Lpg,
    #[sea_orm(string_value = "cng")]
    Cng,
    #[sea_orm(string_value = "ethanol")]
    Ethanol,
    #[sea_orm(string_value = "biofuel")]
    Biofuel,
    #[sea_orm(string_value = "electric")]
    Electric,
    #[sea_orm(string_value = "hydrogen")]
    Hydrogen,
}

/// One row per (vehicle, allowed energy type)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle_energy_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vehicle_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub energy_type: EnergyType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Vehicle,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
