//! Booking ("transact") entity. Rows are immutable once written.

use sea_orm::entity::prelude::*;

use domain::Booking;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transacts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub operation_date: DateTimeUtc,
    pub apartment_id: i32,
    pub guest_id: i32,
    pub price: i64,
    pub date_arrival: Date,
    pub date_departure: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::apartment::Entity",
        from = "Column::ApartmentId",
        to = "super::apartment::Column::Id"
    )]
    Apartment,
    #[sea_orm(
        belongs_to = "super::guest::Entity",
        from = "Column::GuestId",
        to = "super::guest::Column::Id"
    )]
    Guest,
}

impl Related<super::apartment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Apartment.def()
    }
}

impl Related<super::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Booking {
    fn from(model: Model) -> Self {
        Booking {
            id: model.id,
            operation_date: model.operation_date,
            apartment_id: model.apartment_id,
            guest_id: model.guest_id,
            price: model.price,
            date_arrival: model.date_arrival,
            date_departure: model.date_departure,
        }
    }
}
