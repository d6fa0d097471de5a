//! Create vehicle_energy_types join table

use sea_orm_migration::prelude::*;

use super::m20240901_000002_create_vehicles::Vehicles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleEnergyTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VehicleEnergyTypes::VehicleId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VehicleEnergyTypes::EnergyType)
                            .string_len(20)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(VehicleEnergyTypes::VehicleId)
                            .col(VehicleEnergyTypes::EnergyType),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_energy_types_vehicle")
                            .from(VehicleEnergyTypes::Table, VehicleEnergyTypes::VehicleId)
                            .to(Vehicles::Table, Vehicles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehicleEnergyTypes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum VehicleEnergyTypes {
    Table,
    VehicleId,
    EnergyType,
}
