//! Database schema migrations

use sea_orm_migration::prelude::*;

mod m20240901_000001_create_users;
mod m20240901_000002_create_vehicles;
mod m20240901_000003_create_vehicle_energy_types;
mod m20240901_000004_create_energy_entries;
mod m20240901_000005_create_service_types;
mod m20240901_000006_create_service_records;
mod m20240901_000007_create_service_items;
mod m20240901_000008_create_refresh_tokens;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_users::Migration),
            Box::new(m20240901_000002_create_vehicles::Migration),
            Box::new(m20240901_000003_create_vehicle_energy_types::Migration),
            Box::new(m20240901_000004_create_energy_entries::Migration),
            Box::new(m20240901_000005_create_service_types::Migration),
            Box::new(m20240901_000006_create_service_records::Migration),
            Box::new(m20240901_000007_create_service_items::Migration),
            Box::new(m20240901_000008_create_refresh_tokens::Migration),
        ]
    }
}
