//! Create service_records table

use sea_orm_migration::prelude::*;

use super::m20240901_000002_create_vehicles::Vehicles;
use super::m20240901_000005_create_service_types::ServiceTypes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceRecords::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ServiceRecords::VehicleId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceRecords::ServiceTypeId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceRecords::Title).string().not_null())
                    .col(
                        ColumnDef::new(ServiceRecords::ServiceDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceRecords::Mileage)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceRecords::ManualCost).double())
                    .col(ColumnDef::new(ServiceRecords::Notes).string())
                    .col(
                        ColumnDef::new(ServiceRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_records_vehicle")
                            .from(ServiceRecords::Table, ServiceRecords::VehicleId)
                            .to(Vehicles::Table, Vehicles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_records_service_type")
                            .from(ServiceRecords::Table, ServiceRecords::ServiceTypeId)
                            .to(ServiceTypes::Table, ServiceTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_records_vehicle_date")
                    .table(ServiceRecords::Table)
                    .col(ServiceRecords::VehicleId)
                    .col(ServiceRecords::ServiceDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ServiceRecords {
    Table,
    Id,
    VehicleId,
    ServiceTypeId,
    Title,
    ServiceDate,
    Mileage,
    ManualCost,
    Notes,
    CreatedAt,
    UpdatedAt,
}
