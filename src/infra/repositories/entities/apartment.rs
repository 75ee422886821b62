//! Apartment entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "apartments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub hotel_id: i32,
    pub apartment_class_id: i32,
    /// Cleared when the apartment is booked
    pub is_free: bool,
    pub bed_count: i32,
    pub price_per_night: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::HotelId",
        to = "super::hotel::Column::Id"
    )]
    Hotel,
    #[sea_orm(
        belongs_to = "super::apartment_class::Entity",
        from = "Column::ApartmentClassId",
        to = "super::apartment_class::Column::Id"
    )]
    ApartmentClass,
    #[sea_orm(has_many = "super::apartment_image::Entity")]
    ApartmentImage,
    #[sea_orm(has_many = "super::transact::Entity")]
    Transact,
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl Related<super::apartment_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApartmentClass.def()
    }
}

impl Related<super::apartment_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApartmentImage.def()
    }
}

impl Related<super::transact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transact.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
