//! Service Container - Centralized service access.
//!
//! Builds every service over one shared Unit of Work so repositories are
//! constructed once at startup.

use std::sync::Arc;

use super::{
    ApartmentManager, ApartmentService, BookingManager, BookingService, GuestManager,
    GuestService, HotelManager, HotelService, SessionManager, SessionService,
};
use crate::config::Config;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn guests(&self) -> Arc<dyn GuestService>;

    fn hotels(&self) -> Arc<dyn HotelService>;

    fn apartments(&self) -> Arc<dyn ApartmentService>;

    fn bookings(&self) -> Arc<dyn BookingService>;

    fn sessions(&self) -> Arc<dyn SessionService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    guest_service: Arc<dyn GuestService>,
    hotel_service: Arc<dyn HotelService>,
    apartment_service: Arc<dyn ApartmentService>,
    booking_service: Arc<dyn BookingService>,
    session_service: Arc<dyn SessionService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            guest_service: Arc::new(GuestManager::new(uow.clone())),
            hotel_service: Arc::new(HotelManager::new(uow.clone())),
            apartment_service: Arc::new(ApartmentManager::new(uow.clone())),
            booking_service: Arc::new(BookingManager::new(uow.clone())),
            session_service: Arc::new(SessionManager::new(uow, config)),
        }
    }
}

impl ServiceContainer for Services {
    fn guests(&self) -> Arc<dyn GuestService> {
        self.guest_service.clone()
    }

    fn hotels(&self) -> Arc<dyn HotelService> {
        self.hotel_service.clone()
    }

    fn apartments(&self) -> Arc<dyn ApartmentService> {
        self.apartment_service.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingService> {
        self.booking_service.clone()
    }

    fn sessions(&self) -> Arc<dyn SessionService> {
        self.session_service.clone()
    }
}
