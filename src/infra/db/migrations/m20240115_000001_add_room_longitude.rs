//! Migration: Add the longitude column to rooms.
//!
//! Listings originally carried latitude only; the map surface needs both
//! coordinates. Existing rows default to 0, matching the fallback used when
//! a listing is created without coordinates.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Rooms::Table)
                    .add_column(
                        ColumnDef::new(Rooms::Lon)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Rooms::Table)
                    .drop_column(Rooms::Lon)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Rooms {
    Table,
    Lon,
}
