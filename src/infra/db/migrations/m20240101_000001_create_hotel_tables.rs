//! Migration: Create guests, hotels (with addresses) and apartment tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Guests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Guests::LastName).string_len(20).not_null())
                    .col(ColumnDef::new(Guests::FirstName).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Guests::PhoneNumber)
                            .string_len(14)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Addresses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Addresses::Country).string_len(40).not_null())
                    .col(ColumnDef::new(Addresses::City).string_len(40).not_null())
                    .col(ColumnDef::new(Addresses::Street).string_len(40).not_null())
                    .col(ColumnDef::new(Addresses::House).string_len(10).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hotels::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hotels::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Hotels::AddressId).integer().not_null())
                    .col(ColumnDef::new(Hotels::StarsCount).integer().not_null())
                    .col(ColumnDef::new(Hotels::Description).text().not_null())
                    .col(ColumnDef::new(Hotels::HeaderImageAddress).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotels_address_id")
                            .from(Hotels::Table, Hotels::AddressId)
                            .to(Addresses::Table, Addresses::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ApartmentClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApartmentClasses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ApartmentClasses::ClassName)
                            .string_len(40)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Apartments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Apartments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Apartments::Name).string_len(40).not_null())
                    .col(ColumnDef::new(Apartments::HotelId).integer().not_null())
                    .col(ColumnDef::new(Apartments::ApartmentClassId).integer().not_null())
                    .col(
                        ColumnDef::new(Apartments::IsFree)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Apartments::BedCount).integer().not_null())
                    .col(ColumnDef::new(Apartments::PricePerNight).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_apartments_hotel_id")
                            .from(Apartments::Table, Apartments::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_apartments_apartment_class_id")
                            .from(Apartments::Table, Apartments::ApartmentClassId)
                            .to(ApartmentClasses::Table, ApartmentClasses::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_apartments_hotel_id")
                    .table(Apartments::Table)
                    .col(Apartments::HotelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ApartmentImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApartmentImages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ApartmentImages::ApartmentId).integer().not_null())
                    .col(ColumnDef::new(ApartmentImages::Address).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_apartment_images_apartment_id")
                            .from(ApartmentImages::Table, ApartmentImages::ApartmentId)
                            .to(Apartments::Table, Apartments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApartmentImages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Apartments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ApartmentClasses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Guests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum Guests {
    Table,
    Id,
    LastName,
    FirstName,
    PhoneNumber,
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
    Country,
    City,
    Street,
    House,
}

#[derive(DeriveIden)]
enum Hotels {
    Table,
    Id,
    Name,
    AddressId,
    StarsCount,
    Description,
    HeaderImageAddress,
}

#[derive(DeriveIden)]
pub(super) enum ApartmentClasses {
    Table,
    Id,
    ClassName,
}

#[derive(DeriveIden)]
pub(super) enum Apartments {
    Table,
    Id,
    Name,
    HotelId,
    ApartmentClassId,
    IsFree,
    BedCount,
    PricePerNight,
}

#[derive(DeriveIden)]
enum ApartmentImages {
    Table,
    Id,
    ApartmentId,
    Address,
}
