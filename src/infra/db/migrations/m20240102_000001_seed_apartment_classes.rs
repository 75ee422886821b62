//! Migration: Seed the apartment class lookup table.

use domain::APARTMENT_CLASSES;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

use super::m20240101_000001_create_hotel_tables::ApartmentClasses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(ApartmentClasses::Table)
            .columns([ApartmentClasses::ClassName]);
        for class_name in APARTMENT_CLASSES {
            insert
                .values([(*class_name).into()])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        let db = manager.get_connection();
        db.execute(db.get_database_backend().build(&insert)).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(ApartmentClasses::Table)
            .and_where(
                Expr::col(ApartmentClasses::ClassName).is_in(APARTMENT_CLASSES.iter().copied()),
            )
            .to_owned();

        let db = manager.get_connection();
        db.execute(db.get_database_backend().build(&delete)).await?;
        Ok(())
    }
}
