//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    ApartmentService, BookingService, GuestService, HotelService, ServiceContainer, Services,
    SessionService,
};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub guest_service: Arc<dyn GuestService>,
    pub hotel_service: Arc<dyn HotelService>,
    pub apartment_service: Arc<dyn ApartmentService>,
    pub booking_service: Arc<dyn BookingService>,
    pub session_service: Arc<dyn SessionService>,
    /// Database handle, used by the health check
    pub database: Arc<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build every service over the given database.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config.clone());
        Self::from_container(&container, database, config)
    }

    /// Take the services out of any container.
    pub fn from_container(
        container: &dyn ServiceContainer,
        database: Arc<Database>,
        config: Config,
    ) -> Self {
        Self {
            guest_service: container.guests(),
            hotel_service: container.hotels(),
            apartment_service: container.apartments(),
            booking_service: container.bookings(),
            session_service: container.sessions(),
            database,
            config: Arc::new(config),
        }
    }
}
