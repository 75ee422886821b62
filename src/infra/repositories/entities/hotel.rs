//! Hotel entity. Each hotel owns exactly one address row.

use sea_orm::entity::prelude::*;

use domain::Hotel;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hotels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address_id: i32,
    pub stars_count: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub header_image_address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::address::Entity",
        from = "Column::AddressId",
        to = "super::address::Column::Id"
    )]
    Address,
    #[sea_orm(has_many = "super::apartment::Entity")]
    Apartment,
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl Related<super::apartment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Apartment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Combine the hotel row with its address row.
    pub fn into_domain(self, address: super::address::Model) -> Hotel {
        Hotel {
            id: self.id,
            name: self.name,
            address: address.into(),
            stars_count: self.stars_count,
            description: self.description,
            header_image_address: self.header_image_address,
        }
    }
}
