//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain rules and repositories to fulfill the
//! API's use cases. They depend on the `UnitOfWork` abstraction for
//! repository access and transaction management.

mod apartment_service;
mod booking_service;
pub mod container;
mod guest_service;
mod hotel_service;
mod session_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use apartment_service::{ApartmentManager, ApartmentService};
pub use booking_service::{BookingManager, BookingService};
pub use guest_service::{GuestManager, GuestService, NO_SUCH_GUEST};
pub use hotel_service::{HotelApartments, HotelManager, HotelService};
pub use session_service::{Session, SessionClaims, SessionManager, SessionService};

/// Unit of Work over mocked repositories for service unit tests.
#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use std::sync::Arc;

    use common::{AppError, AppResult};

    use crate::infra::repositories::{
        ApartmentClassRepository, ApartmentImageRepository, ApartmentRepository,
        BookingRepository, GuestRepository, HotelRepository, MockApartmentClassRepository,
        MockApartmentImageRepository, MockApartmentRepository, MockBookingRepository,
        MockGuestRepository, MockHotelRepository,
    };
    use crate::infra::{TransactionContext, TxFuture, UnitOfWork};

    pub struct TestUnitOfWork {
        guests: Arc<dyn GuestRepository>,
        hotels: Arc<dyn HotelRepository>,
        apartments: Arc<dyn ApartmentRepository>,
        apartment_classes: Arc<dyn ApartmentClassRepository>,
        apartment_images: Arc<dyn ApartmentImageRepository>,
        bookings: Arc<dyn BookingRepository>,
    }

    impl Default for TestUnitOfWork {
        fn default() -> Self {
            Self {
                guests: Arc::new(MockGuestRepository::new()),
                hotels: Arc::new(MockHotelRepository::new()),
                apartments: Arc::new(MockApartmentRepository::new()),
                apartment_classes: Arc::new(MockApartmentClassRepository::new()),
                apartment_images: Arc::new(MockApartmentImageRepository::new()),
                bookings: Arc::new(MockBookingRepository::new()),
            }
        }
    }

    impl TestUnitOfWork {
        pub fn with_guests(mut self, repo: MockGuestRepository) -> Self {
            self.guests = Arc::new(repo);
            self
        }

        pub fn with_hotels(mut self, repo: MockHotelRepository) -> Self {
            self.hotels = Arc::new(repo);
            self
        }

        pub fn with_apartments(mut self, repo: MockApartmentRepository) -> Self {
            self.apartments = Arc::new(repo);
            self
        }

        pub fn with_apartment_classes(mut self, repo: MockApartmentClassRepository) -> Self {
            self.apartment_classes = Arc::new(repo);
            self
        }

        pub fn with_apartment_images(mut self, repo: MockApartmentImageRepository) -> Self {
            self.apartment_images = Arc::new(repo);
            self
        }

        pub fn with_bookings(mut self, repo: MockBookingRepository) -> Self {
            self.bookings = Arc::new(repo);
            self
        }
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn guests(&self) -> Arc<dyn GuestRepository> {
            self.guests.clone()
        }

        fn hotels(&self) -> Arc<dyn HotelRepository> {
            self.hotels.clone()
        }

        fn apartments(&self) -> Arc<dyn ApartmentRepository> {
            self.apartments.clone()
        }

        fn apartment_classes(&self) -> Arc<dyn ApartmentClassRepository> {
            self.apartment_classes.clone()
        }

        fn apartment_images(&self) -> Arc<dyn ApartmentImageRepository> {
            self.apartment_images.clone()
        }

        fn bookings(&self) -> Arc<dyn BookingRepository> {
            self.bookings.clone()
        }

        // Transactional paths are covered by the SQLite integration tests
        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
            T: Send,
        {
            Err(AppError::internal("Transactions not supported in test mock"))
        }
    }
}
