//! Apartment service - apartments, their classes and their images.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{
    Apartment, ApartmentClass, ApartmentFilter, ApartmentImage, NewApartment, NewApartmentImage,
};

use crate::infra::UnitOfWork;

#[async_trait]
pub trait ApartmentService: Send + Sync {
    async fn list_apartments(&self, filter: ApartmentFilter) -> AppResult<Vec<Apartment>>;

    async fn get_apartment(&self, id: i32) -> AppResult<Apartment>;

    /// Create a free apartment in an existing hotel with an existing class
    async fn create_apartment(&self, apartment: NewApartment) -> AppResult<Apartment>;

    async fn delete_apartment(&self, id: i32) -> AppResult<()>;

    async fn list_classes(&self) -> AppResult<Vec<ApartmentClass>>;

    async fn list_images(&self, apartment_id: i32) -> AppResult<Vec<ApartmentImage>>;

    async fn add_image(&self, image: NewApartmentImage) -> AppResult<ApartmentImage>;
}

pub struct ApartmentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ApartmentManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn ensure_apartment(&self, id: i32) -> AppResult<()> {
        self.get_apartment(id).await.map(|_| ())
    }
}

#[async_trait]
impl<U: UnitOfWork> ApartmentService for ApartmentManager<U> {
    async fn list_apartments(&self, filter: ApartmentFilter) -> AppResult<Vec<Apartment>> {
        self.uow.apartments().list(&filter).await
    }

    async fn get_apartment(&self, id: i32) -> AppResult<Apartment> {
        self.uow
            .apartments()
            .find_by_id(id)
            .await?
            .ok_or_not_found("apartment")
    }

    async fn create_apartment(&self, apartment: NewApartment) -> AppResult<Apartment> {
        self.uow
            .hotels()
            .find_by_id(apartment.hotel_id)
            .await?
            .ok_or_not_found("hotel")?;
        self.uow
            .apartment_classes()
            .find_by_id(apartment.apartment_class_id)
            .await?
            .ok_or_not_found("apartment class")?;

        let created = self.uow.apartments().create(apartment).await?;
        tracing::info!(
            apartment_id = created.id,
            hotel_id = created.hotel.id,
            "Apartment created"
        );
        Ok(created)
    }

    async fn delete_apartment(&self, id: i32) -> AppResult<()> {
        if self.uow.apartments().delete(id).await? == 0 {
            return Err(AppError::not_found("apartment"));
        }
        tracing::info!(apartment_id = id, "Apartment deleted");
        Ok(())
    }

    async fn list_classes(&self) -> AppResult<Vec<ApartmentClass>> {
        self.uow.apartment_classes().list().await
    }

    async fn list_images(&self, apartment_id: i32) -> AppResult<Vec<ApartmentImage>> {
        self.ensure_apartment(apartment_id).await?;
        self.uow
            .apartment_images()
            .list_by_apartment(apartment_id)
            .await
    }

    async fn add_image(&self, image: NewApartmentImage) -> AppResult<ApartmentImage> {
        self.ensure_apartment(image.apartment_id).await?;
        self.uow.apartment_images().create(image).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::infra::repositories::{
        MockApartmentClassRepository, MockApartmentImageRepository, MockApartmentRepository,
        MockHotelRepository,
    };
    use crate::services::testing::TestUnitOfWork;
    use domain::{Address, Hotel, HotelRef};

    fn new_apartment() -> NewApartment {
        NewApartment {
            name: "Suite 7".to_string(),
            bed_count: 2,
            price_per_night: 100,
            apartment_class_id: 1,
            hotel_id: 1,
        }
    }

    fn apartment(id: i32) -> Apartment {
        Apartment {
            id,
            name: "Suite 7".to_string(),
            hotel: HotelRef {
                id: 1,
                name: "Volga".to_string(),
            },
            apartment_class: ApartmentClass {
                id: 1,
                class_name: "standard".to_string(),
            },
            is_free: true,
            bed_count: 2,
            price_per_night: 100,
        }
    }

    fn hotel() -> Hotel {
        Hotel {
            id: 1,
            name: "Volga".to_string(),
            address: Address {
                id: 1,
                country: "Russia".to_string(),
                city: "Kazan".to_string(),
                street: "Baumana".to_string(),
                house: "1".to_string(),
            },
            stars_count: 4,
            description: String::new(),
            header_image_address: String::new(),
        }
    }

    #[tokio::test]
    async fn create_requires_existing_hotel() {
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_by_id().returning(|_| Ok(None));
        let mut apartments = MockApartmentRepository::new();
        apartments.expect_create().never();

        let service = ApartmentManager::new(Arc::new(
            TestUnitOfWork::default()
                .with_hotels(hotels)
                .with_apartments(apartments),
        ));

        let err = service.create_apartment(new_apartment()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "hotel not found"));
    }

    #[tokio::test]
    async fn create_requires_existing_class() {
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_by_id().returning(|_| Ok(Some(hotel())));
        let mut classes = MockApartmentClassRepository::new();
        classes.expect_find_by_id().with(eq(1)).returning(|_| Ok(None));

        let service = ApartmentManager::new(Arc::new(
            TestUnitOfWork::default()
                .with_hotels(hotels)
                .with_apartment_classes(classes),
        ));

        let err = service.create_apartment(new_apartment()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "apartment class not found"));
    }

    #[tokio::test]
    async fn create_stores_free_apartment() {
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_by_id().returning(|_| Ok(Some(hotel())));
        let mut classes = MockApartmentClassRepository::new();
        classes.expect_find_by_id().returning(|id| {
            Ok(Some(ApartmentClass {
                id,
                class_name: "standard".to_string(),
            }))
        });
        let mut apartments = MockApartmentRepository::new();
        apartments
            .expect_create()
            .times(1)
            .returning(|_| Ok(apartment(7)));

        let service = ApartmentManager::new(Arc::new(
            TestUnitOfWork::default()
                .with_hotels(hotels)
                .with_apartment_classes(classes)
                .with_apartments(apartments),
        ));

        let created = service.create_apartment(new_apartment()).await.unwrap();
        assert_eq!(created.id, 7);
        assert!(created.is_free);
    }

    #[tokio::test]
    async fn delete_missing_apartment_is_not_found() {
        let mut apartments = MockApartmentRepository::new();
        apartments.expect_delete().with(eq(5)).returning(|_| Ok(0));

        let service =
            ApartmentManager::new(Arc::new(TestUnitOfWork::default().with_apartments(apartments)));

        let err = service.delete_apartment(5).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn images_of_missing_apartment_are_not_found() {
        let mut apartments = MockApartmentRepository::new();
        apartments.expect_find_by_id().returning(|_| Ok(None));
        let mut images = MockApartmentImageRepository::new();
        images.expect_list_by_apartment().never();

        let service = ApartmentManager::new(Arc::new(
            TestUnitOfWork::default()
                .with_apartments(apartments)
                .with_apartment_images(images),
        ));

        let err = service.list_images(3).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "apartment not found"));
    }
}
