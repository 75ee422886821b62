//! Hotel handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::AppResult;
use domain::{
    Apartment, ApartmentImage, Hotel, HotelFilter, HotelSortField, NewAddress, NewHotel,
    SortOrder,
};

use crate::api::extractors::{Path, Query, ValidatedJson};
use crate::api::AppState;
use crate::types::{Created, MessageResponse};

/// Hotel address as submitted
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddressRequest {
    #[validate(length(min = 2, max = 40, message = "country must be 2 to 40 characters long"))]
    #[schema(example = "Russia")]
    pub country: String,
    #[validate(length(min = 2, max = 40, message = "city must be 2 to 40 characters long"))]
    #[schema(example = "Kazan")]
    pub city: String,
    #[validate(length(min = 2, max = 40, message = "street must be 2 to 40 characters long"))]
    #[schema(example = "Baumana")]
    pub street: String,
    #[validate(length(min = 1, max = 10, message = "house must be 1 to 10 characters long"))]
    #[schema(example = "12a")]
    pub house: String,
}

/// Hotel create and update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct HotelRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters long"))]
    #[schema(example = "Grand Volga")]
    pub name: String,
    #[validate(nested)]
    pub address: AddressRequest,
    #[validate(range(min = 1, max = 5, message = "stars_count must be between 1 and 5"))]
    #[schema(example = 4)]
    pub stars_count: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[schema(example = "/static/hotels/grand-volga.jpg")]
    pub header_image_address: String,
}

impl From<HotelRequest> for NewHotel {
    fn from(req: HotelRequest) -> Self {
        NewHotel {
            name: req.name,
            address: NewAddress {
                country: req.address.country,
                city: req.address.city,
                street: req.address.street,
                house: req.address.house,
            },
            stars_count: req.stars_count,
            description: req.description,
            header_image_address: req.header_image_address,
        }
    }
}

/// Hotel listing filters; everything optional
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HotelQuery {
    /// Exact country match
    pub country: Option<String>,
    /// Exact city match
    pub city: Option<String>,
    /// `id` (default), `name` or `stars_count`
    #[param(inline)]
    pub sort_by: Option<HotelSortField>,
    /// `asc` (default) or `desc`
    #[param(inline)]
    pub sort_order: Option<SortOrder>,
}

impl From<HotelQuery> for HotelFilter {
    fn from(query: HotelQuery) -> Self {
        HotelFilter {
            country: query.country,
            city: query.city,
            sort_by: query.sort_by.unwrap_or_default(),
            sort_order: query.sort_order.unwrap_or_default(),
        }
    }
}

/// `{"hotels": [...]}`
#[derive(Debug, Serialize, ToSchema)]
pub struct HotelsResponse {
    pub hotels: Vec<Hotel>,
}

/// Free apartments of a hotel and the images of its apartments
#[derive(Debug, Serialize, ToSchema)]
pub struct HotelApartmentsResponse {
    pub apartments: Vec<Apartment>,
    pub apartments_images: Vec<ApartmentImage>,
}

/// Create hotel routes
pub fn hotel_routes() -> Router<AppState> {
    Router::new()
        .route("/hotels", get(list_hotels).post(create_hotel))
        .route(
            "/hotels/:id",
            get(get_hotel).put(update_hotel).delete(delete_hotel),
        )
        .route("/hotel/:id/apartments", get(hotel_apartments))
}

/// List hotels
#[utoipa::path(
    get,
    path = "/hotels",
    tag = "Hotels",
    params(HotelQuery),
    responses(
        (status = 200, description = "Hotels with their addresses", body = HotelsResponse),
        (status = 400, description = "Unknown sort field or order")
    )
)]
pub async fn list_hotels(
    State(state): State<AppState>,
    Query(query): Query<HotelQuery>,
) -> AppResult<Json<HotelsResponse>> {
    let hotels = state.hotel_service.list_hotels(query.into()).await?;
    Ok(Json(HotelsResponse { hotels }))
}

/// Get a hotel by ID
#[utoipa::path(
    get,
    path = "/hotels/{id}",
    tag = "Hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel", body = Hotel),
        (status = 404, description = "Hotel not found")
    )
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Hotel>> {
    Ok(Json(state.hotel_service.get_hotel(id).await?))
}

/// Create a hotel together with its address
#[utoipa::path(
    post,
    path = "/hotels",
    tag = "Hotels",
    request_body = HotelRequest,
    responses(
        (status = 201, description = "Hotel created", body = Hotel),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<HotelRequest>,
) -> AppResult<Created<Hotel>> {
    let hotel = state.hotel_service.create_hotel(payload.into()).await?;
    Ok(Created(hotel))
}

/// Replace a hotel and its address
#[utoipa::path(
    put,
    path = "/hotels/{id}",
    tag = "Hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = HotelRequest,
    responses(
        (status = 200, description = "Hotel updated", body = Hotel),
        (status = 404, description = "Hotel not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_hotel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<HotelRequest>,
) -> AppResult<Json<Hotel>> {
    let hotel = state.hotel_service.update_hotel(id, payload.into()).await?;
    Ok(Json(hotel))
}

/// Delete a hotel and its address
#[utoipa::path(
    delete,
    path = "/hotels/{id}",
    tag = "Hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel deleted", body = MessageResponse),
        (status = 404, description = "Hotel not found"),
        (status = 409, description = "Hotel still has apartments")
    )
)]
pub async fn delete_hotel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.hotel_service.delete_hotel(id).await?;
    Ok(Json(MessageResponse::new("hotel deleted")))
}

/// Free apartments of a hotel
#[utoipa::path(
    get,
    path = "/hotel/{id}/apartments",
    tag = "Hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Free apartments and apartment images", body = HotelApartmentsResponse),
        (status = 404, description = "Hotel not found")
    )
)]
pub async fn hotel_apartments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<HotelApartmentsResponse>> {
    let listing = state.hotel_service.hotel_apartments(id).await?;
    Ok(Json(HotelApartmentsResponse {
        apartments: listing.apartments,
        apartments_images: listing.images,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(stars_count: i32, city: &str) -> HotelRequest {
        HotelRequest {
            name: "Grand Volga".to_string(),
            address: AddressRequest {
                country: "Russia".to_string(),
                city: city.to_string(),
                street: "Baumana".to_string(),
                house: "12a".to_string(),
            },
            stars_count,
            description: String::new(),
            header_image_address: String::new(),
        }
    }

    #[test]
    fn star_rating_is_bounded() {
        assert!(request(5, "Kazan").validate().is_ok());
        assert!(request(0, "Kazan").validate().is_err());
        assert!(request(6, "Kazan").validate().is_err());
    }

    #[test]
    fn address_is_validated() {
        assert!(request(3, "K").validate().is_err());
    }

    #[test]
    fn query_defaults_to_id_ascending() {
        let filter = HotelFilter::from(HotelQuery::default());
        assert_eq!(filter.sort_by, HotelSortField::Id);
        assert_eq!(filter.sort_order, SortOrder::Asc);
    }
}
