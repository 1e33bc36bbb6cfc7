//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}.
//! Upgrades are additive: re-running the migrator on an existing store only
//! applies the steps it has not seen, never dropping data.

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_marketplace_tables;
mod m20240115_000001_add_room_longitude;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_marketplace_tables::Migration),
            Box::new(m20240115_000001_add_room_longitude::Migration),
        ]
    }
}
