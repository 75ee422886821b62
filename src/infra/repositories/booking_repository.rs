//! Booking ("transact") repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    FromQueryResult, JoinType, NotSet, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::entities::{apartment, apartment_class, guest, hotel, transact};
use common::{AppError, AppResult};
use domain::{Apartment, ApartmentClass, Booking, BookingDetails, Guest, HotelRef};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Booking history queries. Bookings are only written inside the booking
/// transaction, see [`TxBookingRepository::create`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Bookings of the guest with this phone number, oldest first
    async fn list_by_phone(&self, phone_number: &str) -> AppResult<Vec<BookingDetails>>;
}

/// One booking joined with its guest, apartment, hotel and class.
#[derive(Debug, FromQueryResult)]
struct BookingRow {
    id: i32,
    operation_date: DateTime<Utc>,
    price: i64,
    date_arrival: NaiveDate,
    date_departure: NaiveDate,
    guest_id: i32,
    last_name: String,
    first_name: String,
    phone_number: String,
    apartment_id: i32,
    apartment_name: String,
    is_free: bool,
    bed_count: i32,
    price_per_night: i32,
    hotel_id: i32,
    hotel_name: String,
    apartment_class_id: i32,
    class_name: String,
}

impl From<BookingRow> for BookingDetails {
    fn from(row: BookingRow) -> Self {
        BookingDetails {
            id: row.id,
            operation_date: row.operation_date,
            price: row.price,
            date_arrival: row.date_arrival,
            date_departure: row.date_departure,
            guest: Guest {
                id: row.guest_id,
                last_name: row.last_name,
                first_name: row.first_name,
                phone_number: row.phone_number,
            },
            apartment: Apartment {
                id: row.apartment_id,
                name: row.apartment_name,
                hotel: HotelRef {
                    id: row.hotel_id,
                    name: row.hotel_name,
                },
                apartment_class: ApartmentClass {
                    id: row.apartment_class_id,
                    class_name: row.class_name,
                },
                is_free: row.is_free,
                bed_count: row.bed_count,
                price_per_night: row.price_per_night,
            },
        }
    }
}

pub struct BookingStore {
    db: DatabaseConnection,
}

impl BookingStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for BookingStore {
    async fn list_by_phone(&self, phone_number: &str) -> AppResult<Vec<BookingDetails>> {
        let rows = transact::Entity::find()
            .select_only()
            .column(transact::Column::Id)
            .column(transact::Column::OperationDate)
            .column(transact::Column::Price)
            .column(transact::Column::DateArrival)
            .column(transact::Column::DateDeparture)
            .column(transact::Column::GuestId)
            .column(guest::Column::LastName)
            .column(guest::Column::FirstName)
            .column(guest::Column::PhoneNumber)
            .column(transact::Column::ApartmentId)
            .column_as(apartment::Column::Name, "apartment_name")
            .column(apartment::Column::IsFree)
            .column(apartment::Column::BedCount)
            .column(apartment::Column::PricePerNight)
            .column(apartment::Column::HotelId)
            .column_as(hotel::Column::Name, "hotel_name")
            .column(apartment::Column::ApartmentClassId)
            .column(apartment_class::Column::ClassName)
            .join(JoinType::InnerJoin, transact::Relation::Guest.def())
            .join(JoinType::InnerJoin, transact::Relation::Apartment.def())
            .join(JoinType::InnerJoin, apartment::Relation::Hotel.def())
            .join(JoinType::InnerJoin, apartment::Relation::ApartmentClass.def())
            .filter(guest::Column::PhoneNumber.eq(phone_number))
            .order_by_asc(transact::Column::OperationDate)
            .order_by_asc(transact::Column::Id)
            .into_model::<BookingRow>()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(BookingDetails::from).collect())
    }
}

/// Transaction-bound booking repository.
pub struct TxBookingRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxBookingRepository<'a> {
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Record a booking stamped with the current time
    pub async fn create(
        &self,
        guest_id: i32,
        apartment_id: i32,
        price: i64,
        date_arrival: NaiveDate,
        date_departure: NaiveDate,
    ) -> AppResult<Booking> {
        let model = transact::ActiveModel {
            id: NotSet,
            operation_date: Set(Utc::now()),
            apartment_id: Set(apartment_id),
            guest_id: Set(guest_id),
            price: Set(price),
            date_arrival: Set(date_arrival),
            date_departure: Set(date_departure),
        }
        .insert(self.txn)
        .await
        .map_err(AppError::from)?;

        Ok(Booking::from(model))
    }
}
