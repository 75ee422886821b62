//! Guest database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Guest;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    #[sea_orm(unique)]
    pub phone_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transact::Entity")]
    Transact,
}

impl Related<super::transact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transact.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Guest {
    fn from(model: Model) -> Self {
        Guest {
            id: model.id,
            last_name: model.last_name,
            first_name: model.first_name,
            phone_number: model.phone_number,
        }
    }
}
