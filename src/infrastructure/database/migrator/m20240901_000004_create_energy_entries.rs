//! Create energy_entries table

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
                    .table(EnergyEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EnergyEntries::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EnergyEntries::VehicleId).string().not_null())
                    .col(
                        ColumnDef::new(EnergyEntries::EntryDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EnergyEntries::Mileage)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EnergyEntries::EnergyType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EnergyEntries::EnergyUnit)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(EnergyEntries::Volume).double().not_null())
                    .col(ColumnDef::new(EnergyEntries::Cost).double())
                    .col(ColumnDef::new(EnergyEntries::PricePerUnit).double())
                    .col(
                        ColumnDef::new(EnergyEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EnergyEntries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_energy_entries_vehicle")
                            .from(EnergyEntries::Table, EnergyEntries::VehicleId)
                            .to(Vehicles::Table, Vehicles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_energy_entries_vehicle_date")
                    .table(EnergyEntries::Table)
                    .col(EnergyEntries::VehicleId)
                    .col(EnergyEntries::EntryDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EnergyEntries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum EnergyEntries {
    Table,
    Id,
    VehicleId,
    EntryDate,
    Mileage,
    EnergyType,
    EnergyUnit,
    Volume,
    Cost,
    PricePerUnit,
    CreatedAt,
    UpdatedAt,
}
