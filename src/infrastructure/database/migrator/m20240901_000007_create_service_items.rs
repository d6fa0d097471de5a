//! Create service_items table

use sea_orm_migration::prelude::*;

use super::m20240901_000006_create_service_records::ServiceRecords;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceItems::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ServiceItems::ServiceRecordId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceItems::Name).string().not_null())
                    .col(
                        ColumnDef::new(ServiceItems::Kind)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceItems::Quantity)
                            .double()
                            .not_null()
                            .default(1.0),
                    )
                    .col(
                        ColumnDef::new(ServiceItems::UnitPrice)
                            .double()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_items_service_record")
                            .from(ServiceItems::Table, ServiceItems::ServiceRecordId)
                            .to(ServiceRecords::Table, ServiceRecords::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_items_record")
                    .table(ServiceItems::Table)
                    .col(ServiceItems::ServiceRecordId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ServiceItems {
    Table,
    Id,
    ServiceRecordId,
    Name,
    Kind,
    Quantity,
    UnitPrice,
}
