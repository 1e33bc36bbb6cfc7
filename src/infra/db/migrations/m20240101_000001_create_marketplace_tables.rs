//! Migration: Create the four marketplace collections and their indexes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(ColumnDef::new(Users::Avatar).string().null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One account per address; emails are stored lowercased
        manager
            .create_index(
                Index::create()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .col(ColumnDef::new(Rooms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Rooms::Address).string().not_null())
                    .col(ColumnDef::new(Rooms::City).string().not_null())
                    .col(ColumnDef::new(Rooms::Lat).double().not_null())
                    .col(ColumnDef::new(Rooms::Price).double().not_null())
                    .col(ColumnDef::new(Rooms::Image).string().null())
                    .col(ColumnDef::new(Rooms::OwnerEmail).string().not_null())
                    .col(
                        ColumnDef::new(Rooms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rooms::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_rooms_owner_email", Rooms::OwnerEmail),
            ("idx_rooms_city", Rooms::City),
            ("idx_rooms_price", Rooms::Price),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Rooms::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(Requests::Table)
                    .col(
                        ColumnDef::new(Requests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Requests::RoomId).uuid().not_null())
                    .col(ColumnDef::new(Requests::RequesterEmail).string().not_null())
                    .col(ColumnDef::new(Requests::State).string().not_null())
                    .col(
                        ColumnDef::new(Requests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Requests::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_requests_room_id", Requests::RoomId),
            ("idx_requests_requester_email", Requests::RequesterEmail),
            ("idx_requests_state", Requests::State),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Requests::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(Rentals::Table)
                    .col(
                        ColumnDef::new(Rentals::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rentals::RoomId).uuid().not_null())
                    .col(ColumnDef::new(Rentals::TenantEmail).string().not_null())
                    .col(
                        ColumnDef::new(Rentals::StartedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rentals::EndedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Rentals::Active).boolean().not_null())
                    .col(
                        ColumnDef::new(Rentals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_rentals_room_id", Rentals::RoomId),
            ("idx_rentals_tenant_email", Rentals::TenantEmail),
            ("idx_rentals_active", Rentals::Active),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Rentals::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rentals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Requests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    Name,
    Password,
    Avatar,
    CreatedAt,
}

#[derive(Iden, Clone, Copy)]
enum Rooms {
    Table,
    Id,
    Address,
    City,
    Lat,
    Price,
    Image,
    OwnerEmail,
    CreatedAt,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
enum Requests {
    Table,
    Id,
    RoomId,
    RequesterEmail,
    State,
    CreatedAt,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
enum Rentals {
    Table,
    Id,
    RoomId,
    TenantEmail,
    StartedAt,
    EndedAt,
    Active,
    CreatedAt,
}
