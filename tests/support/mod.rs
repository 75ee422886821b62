//! Shared fixtures: an in-memory SQLite database with migrations applied.

#![allow(dead_code)]

use std::sync::Arc;

use common::{CorsConfig, DatabaseConfig, ServerConfig, SessionConfig};
use domain::{Apartment, Guest, Hotel, NewAddress, NewApartment, NewGuest, NewHotel};
use hotel_service::config::Config;
use hotel_service::infra::Database;
use hotel_service::services::{ServiceContainer, Services};

pub fn config() -> Config {
    Config {
        // One connection: every connection to `sqlite::memory:` is its own database
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        server: ServerConfig::default(),
        session: SessionConfig {
            secret: "integration-test-session-secret-0123456789".to_string(),
            expiration_hours: 1,
        },
        cors: CorsConfig::default(),
    }
}

pub async fn database() -> Arc<Database> {
    Arc::new(
        Database::connect(&config().database)
            .await
            .expect("in-memory database with migrations"),
    )
}

pub async fn services() -> (Arc<Database>, Services) {
    let db = database().await;
    let services = Services::from_connection(db.get_connection(), config());
    (db, services)
}

pub fn new_hotel(name: &str, city: &str, stars_count: i32) -> NewHotel {
    NewHotel {
        name: name.to_string(),
        address: NewAddress {
            country: "Russia".to_string(),
            city: city.to_string(),
            street: "Baumana".to_string(),
            house: "12a".to_string(),
        },
        stars_count,
        description: format!("{name} in {city}"),
        header_image_address: format!("/static/hotels/{}.jpg", name.to_lowercase()),
    }
}

pub async fn register_guest(services: &Services, phone_number: &str) -> Guest {
    services
        .guests()
        .register(NewGuest {
            last_name: "Petrov".to_string(),
            first_name: "Petr".to_string(),
            phone_number: phone_number.to_string(),
        })
        .await
        .expect("guest registered")
}

pub async fn create_hotel(services: &Services, name: &str, city: &str, stars: i32) -> Hotel {
    services
        .hotels()
        .create_hotel(new_hotel(name, city, stars))
        .await
        .expect("hotel created")
}

pub async fn create_apartment(services: &Services, hotel_id: i32, price_per_night: i32) -> Apartment {
    let classes = services
        .apartments()
        .list_classes()
        .await
        .expect("seeded apartment classes");

    services
        .apartments()
        .create_apartment(NewApartment {
            name: "Suite".to_string(),
            bed_count: 2,
            price_per_night,
            apartment_class_id: classes[0].id,
            hotel_id,
        })
        .await
        .expect("apartment created")
}
