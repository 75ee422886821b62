//! Booking service - the booking workflow and booking history.
//!
//! A booking is one transaction: resolve guest and apartment, price the
//! stay, insert the record and flip the apartment to booked. The flip is a
//! conditional update, so of two concurrent bookings of one apartment only
//! one commits; the other rolls back with a conflict.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{Booking, BookingDetails, NewBooking, StayPeriod};

use crate::infra::{TransactionContext, UnitOfWork};
use crate::with_transaction;

#[async_trait]
pub trait BookingService: Send + Sync {
    /// Book an apartment for a registered guest
    async fn create_booking(&self, booking: NewBooking) -> AppResult<Booking>;

    /// Bookings made by the guest with this phone number
    async fn list_bookings(&self, phone_number: &str) -> AppResult<Vec<BookingDetails>>;
}

pub struct BookingManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BookingManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> BookingService for BookingManager<U> {
    async fn create_booking(&self, booking: NewBooking) -> AppResult<Booking> {
        // Date errors are reported before any database work
        let period = StayPeriod::parse(&booking.date_arrival, &booking.date_departure)?;

        let created = with_transaction!(self.uow, |ctx| place(ctx, booking, period).await)?;
        tracing::info!(
            booking_id = created.id,
            apartment_id = created.apartment_id,
            price = created.price,
            "Booking created"
        );
        Ok(created)
    }

    async fn list_bookings(&self, phone_number: &str) -> AppResult<Vec<BookingDetails>> {
        self.uow.bookings().list_by_phone(phone_number).await
    }
}

async fn place(
    ctx: TransactionContext<'_>,
    booking: NewBooking,
    period: StayPeriod,
) -> AppResult<Booking> {
    let guest = ctx
        .guests()
        .find_by_phone(&booking.phone_number)
        .await?
        .ok_or_not_found("guest")?;

    let apartment = ctx
        .apartments()
        .find_by_id(booking.apartment_id)
        .await?
        .ok_or_not_found("apartment")?;

    let price = period.quote(apartment.price_per_night)?;

    let record = ctx
        .bookings()
        .create(
            guest.id,
            apartment.id,
            price,
            period.arrival(),
            period.departure(),
        )
        .await?;

    if !ctx.apartments().reserve(apartment.id).await? {
        tracing::debug!(apartment_id = apartment.id, "Apartment already booked");
        return Err(AppError::conflict("apartment is already booked"));
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockBookingRepository;
    use crate::services::testing::TestUnitOfWork;

    fn request(arrival: &str, departure: &str) -> NewBooking {
        NewBooking {
            phone_number: "+79990000001".to_string(),
            apartment_id: 7,
            date_arrival: arrival.to_string(),
            date_departure: departure.to_string(),
        }
    }

    #[tokio::test]
    async fn malformed_date_is_rejected_before_the_transaction() {
        let service = BookingManager::new(Arc::new(TestUnitOfWork::default()));

        let err = service
            .create_booking(request("01.06.2024", "2024-06-04"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn reversed_period_is_rejected() {
        let service = BookingManager::new(Arc::new(TestUnitOfWork::default()));

        let err = service
            .create_booking(request("2024-06-04", "2024-06-04"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn history_unknown_phone_is_empty() {
        let mut bookings = MockBookingRepository::new();
        bookings.expect_list_by_phone().returning(|_| Ok(vec![]));

        let service = BookingManager::new(Arc::new(TestUnitOfWork::default().with_bookings(bookings)));

        assert!(service.list_bookings("+70000000000").await.unwrap().is_empty());
    }
}
