//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    apartment_handler, booking_handler, guest_handler, hotel_handler, session_handler,
};
use crate::config::SESSION_COOKIE_NAME;
use crate::types::MessageResponse;
use domain::{
    Address, Apartment, ApartmentClass, ApartmentImage, Booking, BookingDetails, Guest, Hotel,
    HotelRef, HotelSortField, SortOrder,
};

/// OpenAPI documentation for the hotel service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel Service",
        version = "0.1.0",
        description = "Hotel booking administration: hotels, apartments, guests and bookings",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        guest_handler::create_guest,
        guest_handler::list_guests,
        guest_handler::get_guest,
        guest_handler::delete_guest,
        hotel_handler::list_hotels,
        hotel_handler::get_hotel,
        hotel_handler::create_hotel,
        hotel_handler::update_hotel,
        hotel_handler::delete_hotel,
        hotel_handler::hotel_apartments,
        apartment_handler::list_apartments,
        apartment_handler::get_apartment,
        apartment_handler::create_apartment,
        apartment_handler::delete_apartment,
        apartment_handler::list_images,
        apartment_handler::add_image,
        apartment_handler::list_classes,
        booking_handler::create_booking,
        booking_handler::list_bookings,
        session_handler::login,
        session_handler::logout,
        session_handler::whoami,
    ),
    components(
        schemas(
            Guest,
            Address,
            Hotel,
            HotelRef,
            HotelSortField,
            SortOrder,
            Apartment,
            ApartmentClass,
            ApartmentImage,
            Booking,
            BookingDetails,
            MessageResponse,
            guest_handler::CreateGuestRequest,
            hotel_handler::AddressRequest,
            hotel_handler::HotelRequest,
            hotel_handler::HotelsResponse,
            hotel_handler::HotelApartmentsResponse,
            apartment_handler::CreateApartmentRequest,
            apartment_handler::CreateImageRequest,
            booking_handler::CreateBookingRequest,
            session_handler::LoginRequest,
            session_handler::SessionResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Guests", description = "Guest registration and lookup"),
        (name = "Hotels", description = "Hotel management"),
        (name = "Apartments", description = "Apartments, classes and images"),
        (name = "Bookings", description = "Booking workflow and history"),
        (name = "Sessions", description = "Cookie sessions")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for the session cookie
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    SESSION_COOKIE_NAME,
                    "Session token set by POST /sessions",
                ))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_booking_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/transacts"));
        assert!(doc.paths.paths.contains_key("/hotel/{id}/apartments"));
    }

    #[test]
    fn domain_schemas_carry_examples() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let booking = &doc["components"]["schemas"]["Booking"]["properties"];

        assert_eq!(booking["price"]["example"], 300);
        assert_eq!(booking["date_arrival"]["example"], "2024-06-01");
    }
}
