//! Apartment image repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, NotSet,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::entities::{apartment, apartment_image};
use common::{AppError, AppResult};
use domain::{ApartmentImage, NewApartmentImage};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ApartmentImageRepository: Send + Sync {
    /// Images of one apartment
    async fn list_by_apartment(&self, apartment_id: i32) -> AppResult<Vec<ApartmentImage>>;

    /// Images of every apartment in a hotel
    async fn list_by_hotel(&self, hotel_id: i32) -> AppResult<Vec<ApartmentImage>>;

    /// Attach a new image to an apartment
    async fn create(&self, image: NewApartmentImage) -> AppResult<ApartmentImage>;
}

pub struct ApartmentImageStore {
    db: DatabaseConnection,
}

impl ApartmentImageStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ApartmentImageRepository for ApartmentImageStore {
    async fn list_by_apartment(&self, apartment_id: i32) -> AppResult<Vec<ApartmentImage>> {
        let models = apartment_image::Entity::find()
            .filter(apartment_image::Column::ApartmentId.eq(apartment_id))
            .order_by_asc(apartment_image::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(ApartmentImage::from).collect())
    }

    async fn list_by_hotel(&self, hotel_id: i32) -> AppResult<Vec<ApartmentImage>> {
        let models = apartment_image::Entity::find()
            .join(JoinType::InnerJoin, apartment_image::Relation::Apartment.def())
            .filter(apartment::Column::HotelId.eq(hotel_id))
            .order_by_asc(apartment_image::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(ApartmentImage::from).collect())
    }

    async fn create(&self, image: NewApartmentImage) -> AppResult<ApartmentImage> {
        let model = apartment_image::ActiveModel {
            id: NotSet,
            apartment_id: Set(image.apartment_id),
            address: Set(image.address),
        }
        .insert(&self.db)
        .await
        .map_err(AppError::from)?;

        Ok(ApartmentImage::from(model))
    }
}
