//! Booking handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{Booking, BookingDetails, NewBooking};

use super::PHONE_NUMBER;
use crate::api::extractors::{Path, ValidatedJson};
use crate::api::AppState;
use crate::types::ItemsResponse;

/// Booking request. Dates are `YYYY-MM-DD`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    #[validate(regex(path = *PHONE_NUMBER, message = "phone_number must contain only digits and an optional leading +"))]
    #[schema(example = "+79991234567")]
    pub phone_number: String,
    #[validate(range(min = 1, message = "apartment_id must be positive"))]
    #[schema(example = 7)]
    pub apartment_id: i32,
    #[schema(example = "2024-06-01")]
    pub date_arrival: String,
    #[schema(example = "2024-06-04")]
    pub date_departure: String,
}

impl From<CreateBookingRequest> for NewBooking {
    fn from(req: CreateBookingRequest) -> Self {
        NewBooking {
            phone_number: req.phone_number,
            apartment_id: req.apartment_id,
            date_arrival: req.date_arrival,
            date_departure: req.date_departure,
        }
    }
}

/// Create booking routes
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/transacts", post(create_booking))
        .route("/user/:phone_number/transacts", get(list_bookings))
}

/// Book an apartment
#[utoipa::path(
    post,
    path = "/transacts",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking recorded", body = Booking),
        (status = 400, description = "Malformed JSON"),
        (status = 404, description = "Guest or apartment not found"),
        (status = 409, description = "Apartment is already booked"),
        (status = 422, description = "Invalid dates")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBookingRequest>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_service.create_booking(payload.into()).await?;
    Ok(Json(booking))
}

/// Booking history of a guest
#[utoipa::path(
    get,
    path = "/user/{phone_number}/transacts",
    tag = "Bookings",
    params(("phone_number" = String, Path, description = "Guest phone number")),
    responses(
        (status = 200, description = "Bookings under `items`, oldest first", body = [BookingDetails])
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    Path(phone_number): Path<String>,
) -> AppResult<Json<ItemsResponse<BookingDetails>>> {
    let bookings = state.booking_service.list_bookings(&phone_number).await?;
    Ok(Json(ItemsResponse::new(bookings)))
}
