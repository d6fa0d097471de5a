//! Service line item entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Line item kind
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum ServiceItemKind {
    #[sea_orm(string_value = "part")]
    Part,
    #[sea_orm(string_value = "labor")]
    Labor,
    #[sea_orm(string_value = "tax")]
    Tax,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub service_record_id: String,
    pub kind: ServiceItemKind,
    pub name: String,
    pub unit_price: f64,
    pub quantity: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::service_record::Entity",
        from = "Column::ServiceRecordId",
        to = "super::service_record::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ServiceRecord,
}

impl Related<super::service_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
