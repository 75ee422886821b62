//! Hotel service - hotel lifecycle and the hotel apartment listing.
//!
//! Every hotel write touches the hotel row and its owned address row, so
//! create, update and delete each run in one transaction.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{Apartment, ApartmentImage, Hotel, HotelFilter, NewHotel};

use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Free apartments of a hotel together with the hotel's apartment images.
#[derive(Debug, Clone)]
pub struct HotelApartments {
    pub apartments: Vec<Apartment>,
    pub images: Vec<ApartmentImage>,
}

#[async_trait]
pub trait HotelService: Send + Sync {
    async fn list_hotels(&self, filter: HotelFilter) -> AppResult<Vec<Hotel>>;

    async fn get_hotel(&self, id: i32) -> AppResult<Hotel>;

    async fn create_hotel(&self, hotel: NewHotel) -> AppResult<Hotel>;

    async fn update_hotel(&self, id: i32, hotel: NewHotel) -> AppResult<Hotel>;

    async fn delete_hotel(&self, id: i32) -> AppResult<()>;

    /// Free apartments and images of an existing hotel
    async fn hotel_apartments(&self, id: i32) -> AppResult<HotelApartments>;
}

pub struct HotelManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> HotelManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> HotelService for HotelManager<U> {
    async fn list_hotels(&self, filter: HotelFilter) -> AppResult<Vec<Hotel>> {
        self.uow.hotels().list(&filter).await
    }

    async fn get_hotel(&self, id: i32) -> AppResult<Hotel> {
        self.uow.hotels().find_by_id(id).await?.ok_or_not_found("hotel")
    }

    async fn create_hotel(&self, hotel: NewHotel) -> AppResult<Hotel> {
        let created = with_transaction!(self.uow, |ctx| ctx.hotels().create(hotel).await)?;
        tracing::info!(hotel_id = created.id, "Hotel created");
        Ok(created)
    }

    async fn update_hotel(&self, id: i32, hotel: NewHotel) -> AppResult<Hotel> {
        with_transaction!(self.uow, |ctx| ctx.hotels().update(id, hotel).await)
    }

    async fn delete_hotel(&self, id: i32) -> AppResult<()> {
        with_transaction!(self.uow, |ctx| ctx.hotels().delete(id).await)?;
        tracing::info!(hotel_id = id, "Hotel deleted");
        Ok(())
    }

    async fn hotel_apartments(&self, id: i32) -> AppResult<HotelApartments> {
        self.get_hotel(id).await?;

        let apartments = self.uow.apartments().list_free_by_hotel(id).await?;
        let images = self.uow.apartment_images().list_by_hotel(id).await?;

        Ok(HotelApartments { apartments, images })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::infra::repositories::{
        MockApartmentImageRepository, MockApartmentRepository, MockHotelRepository,
    };
    use crate::services::testing::TestUnitOfWork;
    use common::AppError;
    use domain::{Address, HotelSortField, SortOrder};

    fn hotel(id: i32) -> Hotel {
        Hotel {
            id,
            name: "Volga".to_string(),
            address: Address {
                id,
                country: "Russia".to_string(),
                city: "Kazan".to_string(),
                street: "Baumana".to_string(),
                house: "1".to_string(),
            },
            stars_count: 4,
            description: "River view".to_string(),
            header_image_address: "/img/volga.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn list_passes_filter_through() {
        let mut hotels = MockHotelRepository::new();
        hotels
            .expect_list()
            .withf(|f| {
                f.city.as_deref() == Some("Kazan")
                    && f.sort_by == HotelSortField::StarsCount
                    && f.sort_order == SortOrder::Desc
            })
            .returning(|_| Ok(vec![hotel(1), hotel(2)]));

        let service = HotelManager::new(Arc::new(TestUnitOfWork::default().with_hotels(hotels)));
        let found = service
            .list_hotels(HotelFilter {
                country: None,
                city: Some("Kazan".to_string()),
                sort_by: HotelSortField::StarsCount,
                sort_order: SortOrder::Desc,
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn apartments_of_unknown_hotel_is_not_found() {
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_by_id().with(eq(9)).returning(|_| Ok(None));
        let mut apartments = MockApartmentRepository::new();
        apartments.expect_list_free_by_hotel().never();

        let service = HotelManager::new(Arc::new(
            TestUnitOfWork::default()
                .with_hotels(hotels)
                .with_apartments(apartments),
        ));

        let err = service.hotel_apartments(9).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "hotel not found"));
    }

    #[tokio::test]
    async fn apartments_of_hotel_include_images() {
        let mut hotels = MockHotelRepository::new();
        hotels
            .expect_find_by_id()
            .returning(|id| Ok(Some(hotel(id))));
        let mut apartments = MockApartmentRepository::new();
        apartments
            .expect_list_free_by_hotel()
            .with(eq(1))
            .returning(|_| Ok(vec![]));
        let mut images = MockApartmentImageRepository::new();
        images.expect_list_by_hotel().with(eq(1)).returning(|_| {
            Ok(vec![ApartmentImage {
                id: 1,
                apartment_id: 3,
                address: "/img/3.jpg".to_string(),
            }])
        });

        let service = HotelManager::new(Arc::new(
            TestUnitOfWork::default()
                .with_hotels(hotels)
                .with_apartments(apartments)
                .with_apartment_images(images),
        ));

        let listing = service.hotel_apartments(1).await.unwrap();
        assert!(listing.apartments.is_empty());
        assert_eq!(listing.images.len(), 1);
    }
}
