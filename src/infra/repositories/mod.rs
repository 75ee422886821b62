//! Repository layer - Data access abstraction
//!
//! Each repository has a pooled `*Store` implementing its trait and a
//! `Tx*Repository` bound to an open transaction. Both delegate to the same
//! query functions, generic over `ConnectionTrait`.

pub(crate) mod entities;

mod apartment_class_repository;
mod apartment_image_repository;
mod apartment_repository;
mod booking_repository;
mod guest_repository;
mod hotel_repository;

use common::AppError;
use sea_orm::{DbErr, SqlErr};

pub use apartment_class_repository::{ApartmentClassRepository, ApartmentClassStore};
pub use apartment_image_repository::{ApartmentImageRepository, ApartmentImageStore};
pub use apartment_repository::{ApartmentRepository, ApartmentStore, TxApartmentRepository};
pub use booking_repository::{BookingRepository, BookingStore, TxBookingRepository};
pub use guest_repository::{GuestRepository, GuestStore, TxGuestRepository};
pub use hotel_repository::{HotelRepository, HotelStore, TxHotelRepository};

// Export mocks for tests
#[cfg(any(test, feature = "test-utils"))]
pub use apartment_class_repository::MockApartmentClassRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use apartment_image_repository::MockApartmentImageRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use apartment_repository::MockApartmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use booking_repository::MockBookingRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use guest_repository::MockGuestRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use hotel_repository::MockHotelRepository;

/// Report unique and foreign key violations as a conflict with `message`.
pub(crate) fn conflict_on_constraint(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail))
        | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!("Constraint violation: {}", detail);
            AppError::conflict(message)
        }
        // SQLite raises RESTRICT violations under an extended code sea-orm leaves unclassified
        _ if err.to_string().contains(SQLITE_FOREIGN_KEY_FAILED) => {
            tracing::debug!("Foreign key violation: {}", err);
            AppError::conflict(message)
        }
        _ => AppError::from(err),
    }
}

const SQLITE_FOREIGN_KEY_FAILED: &str = "FOREIGN KEY constraint failed";

#[cfg(test)]
mod tests {
    use sea_orm::RuntimeErr;

    use super::*;

    #[test]
    fn sqlite_foreign_key_failure_is_a_conflict() {
        let err = DbErr::Exec(RuntimeErr::Internal(
            "error returned from database: (code: 1811) FOREIGN KEY constraint failed".to_string(),
        ));

        let mapped = conflict_on_constraint(err, "guest has bookings");
        assert!(matches!(mapped, AppError::Conflict(ref m) if m == "guest has bookings"));
    }

    #[test]
    fn other_database_errors_stay_internal() {
        let err = DbErr::Exec(RuntimeErr::Internal("disk I/O error".to_string()));

        let mapped = conflict_on_constraint(err, "guest has bookings");
        assert!(matches!(mapped, AppError::Database(_)));
    }
}
