//! Booking workflow against real repositories on in-memory SQLite.

mod support;

use chrono::NaiveDate;

use common::AppError;
use domain::NewBooking;
use hotel_service::services::ServiceContainer;

use support::{create_apartment, create_hotel, register_guest, services};

const PHONE: &str = "+79991234567";

fn booking(apartment_id: i32, arrival: &str, departure: &str) -> NewBooking {
    NewBooking {
        phone_number: PHONE.to_string(),
        apartment_id,
        date_arrival: arrival.to_string(),
        date_departure: departure.to_string(),
    }
}

#[tokio::test]
async fn booking_prices_stay_and_reserves_apartment() {
    let (_db, services) = services().await;
    let guest = register_guest(&services, PHONE).await;
    let hotel = create_hotel(&services, "Volga", "Kazan", 4).await;
    let apartment = create_apartment(&services, hotel.id, 100).await;

    let created = services
        .bookings()
        .create_booking(booking(apartment.id, "2024-06-01", "2024-06-04"))
        .await
        .unwrap();

    assert_eq!(created.price, 300);
    assert_eq!(created.guest_id, guest.id);
    assert_eq!(created.apartment_id, apartment.id);
    assert_eq!(created.date_arrival, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(created.date_departure, NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());

    let reloaded = services.apartments().get_apartment(apartment.id).await.unwrap();
    assert!(!reloaded.is_free);

    let listing = services.hotels().hotel_apartments(hotel.id).await.unwrap();
    assert!(listing.apartments.is_empty());
}

#[tokio::test]
async fn repeat_booking_conflicts_and_writes_nothing() {
    let (_db, services) = services().await;
    register_guest(&services, PHONE).await;
    let hotel = create_hotel(&services, "Volga", "Kazan", 4).await;
    let apartment = create_apartment(&services, hotel.id, 100).await;

    services
        .bookings()
        .create_booking(booking(apartment.id, "2024-06-01", "2024-06-04"))
        .await
        .unwrap();

    let err = services
        .bookings()
        .create_booking(booking(apartment.id, "2024-07-01", "2024-07-02"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(ref m) if m == "apartment is already booked"));

    let history = services.bookings().list_bookings(PHONE).await.unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn unknown_apartment_is_not_found_and_writes_nothing() {
    let (_db, services) = services().await;
    register_guest(&services, PHONE).await;

    let err = services
        .bookings()
        .create_booking(booking(4242, "2024-06-01", "2024-06-04"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == "apartment not found"));

    assert!(services.bookings().list_bookings(PHONE).await.unwrap().is_empty());
}

#[tokio::test]
async fn unregistered_guest_cannot_book() {
    let (_db, services) = services().await;
    let hotel = create_hotel(&services, "Volga", "Kazan", 4).await;
    let apartment = create_apartment(&services, hotel.id, 100).await;

    let err = services
        .bookings()
        .create_booking(booking(apartment.id, "2024-06-01", "2024-06-04"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == "guest not found"));

    let reloaded = services.apartments().get_apartment(apartment.id).await.unwrap();
    assert!(reloaded.is_free);
}

#[tokio::test]
async fn invalid_dates_are_validation_errors() {
    let (_db, services) = services().await;
    register_guest(&services, PHONE).await;
    let hotel = create_hotel(&services, "Volga", "Kazan", 4).await;
    let apartment = create_apartment(&services, hotel.id, 100).await;

    for (arrival, departure) in [
        ("2024-13-01", "2024-13-04"),
        ("2024-06-04", "2024-06-01"),
        ("2024-06-01", "2024-06-01"),
    ] {
        let err = services
            .bookings()
            .create_booking(booking(apartment.id, arrival, departure))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "{arrival}..{departure}");
    }

    assert!(services.apartments().get_apartment(apartment.id).await.unwrap().is_free);
}

#[tokio::test]
async fn history_joins_guest_and_apartment() {
    let (_db, services) = services().await;
    register_guest(&services, PHONE).await;
    let hotel = create_hotel(&services, "Volga", "Kazan", 4).await;
    let first = create_apartment(&services, hotel.id, 100).await;
    let second = create_apartment(&services, hotel.id, 250).await;

    for apartment in [&first, &second] {
        services
            .bookings()
            .create_booking(booking(apartment.id, "2024-06-01", "2024-06-03"))
            .await
            .unwrap();
    }

    let history = services.bookings().list_bookings(PHONE).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].apartment.id, first.id);
    assert_eq!(history[0].price, 200);
    assert_eq!(history[1].price, 500);
    assert_eq!(history[1].guest.phone_number, PHONE);
    assert_eq!(history[1].apartment.hotel.name, "Volga");

    assert!(services
        .bookings()
        .list_bookings("+70000000000")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn booked_records_block_deletes() {
    let (_db, services) = services().await;
    register_guest(&services, PHONE).await;
    let hotel = create_hotel(&services, "Volga", "Kazan", 4).await;
    let apartment = create_apartment(&services, hotel.id, 100).await;
    services
        .bookings()
        .create_booking(booking(apartment.id, "2024-06-01", "2024-06-04"))
        .await
        .unwrap();

    let err = services.guests().delete_guest(PHONE).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let err = services.apartments().delete_apartment(apartment.id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}
