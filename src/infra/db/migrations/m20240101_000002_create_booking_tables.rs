//! Migration: Create the transacts (bookings) table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_hotel_tables::{Apartments, Guests};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transacts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Transacts::OperationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transacts::ApartmentId).integer().not_null())
                    .col(ColumnDef::new(Transacts::GuestId).integer().not_null())
                    .col(ColumnDef::new(Transacts::Price).big_integer().not_null())
                    .col(ColumnDef::new(Transacts::DateArrival).date().not_null())
                    .col(ColumnDef::new(Transacts::DateDeparture).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transacts_apartment_id")
                            .from(Transacts::Table, Transacts::ApartmentId)
                            .to(Apartments::Table, Apartments::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transacts_guest_id")
                            .from(Transacts::Table, Transacts::GuestId)
                            .to(Guests::Table, Guests::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transacts_guest_id")
                    .table(Transacts::Table)
                    .col(Transacts::GuestId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transacts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Transacts {
    Table,
    Id,
    OperationDate,
    ApartmentId,
    GuestId,
    Price,
    DateArrival,
    DateDeparture,
}
