//! Apartment, apartment class and apartment image handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::AppResult;
use domain::{
    Apartment, ApartmentClass, ApartmentFilter, ApartmentImage, NewApartment, NewApartmentImage,
};

use crate::api::extractors::{Path, Query, ValidatedJson};
use crate::api::AppState;
use crate::types::{Created, ItemsResponse, MessageResponse};

/// Apartment creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateApartmentRequest {
    #[validate(length(min = 1, max = 40, message = "name must be 1 to 40 characters long"))]
    #[schema(example = "Suite 7")]
    pub name: String,
    #[validate(range(min = 1, max = 10, message = "bed_count must be between 1 and 10"))]
    #[schema(example = 2)]
    pub bed_count: i32,
    /// Price per night
    #[validate(range(min = 0, message = "price cannot be negative"))]
    #[schema(example = 100)]
    pub price: i32,
    #[schema(example = 1)]
    pub apartment_class_id: i32,
    #[schema(example = 1)]
    pub hotel_id: i32,
}

impl From<CreateApartmentRequest> for NewApartment {
    fn from(req: CreateApartmentRequest) -> Self {
        NewApartment {
            name: req.name,
            bed_count: req.bed_count,
            price_per_night: req.price,
            apartment_class_id: req.apartment_class_id,
            hotel_id: req.hotel_id,
        }
    }
}

/// Apartment image request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateImageRequest {
    #[validate(length(min = 1, max = 255, message = "address must be 1 to 255 characters long"))]
    #[schema(example = "/static/apartments/7/bedroom.jpg")]
    pub address: String,
}

/// Apartment listing filters; everything optional
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApartmentQuery {
    pub hotel_id: Option<i32>,
    pub is_free: Option<bool>,
    pub bed_count: Option<i32>,
    /// Apartment class name, e.g. `lux`
    #[serde(rename = "class")]
    pub class_name: Option<String>,
}

impl From<ApartmentQuery> for ApartmentFilter {
    fn from(query: ApartmentQuery) -> Self {
        ApartmentFilter {
            hotel_id: query.hotel_id,
            is_free: query.is_free,
            bed_count: query.bed_count,
            class_name: query.class_name,
        }
    }
}

/// Create apartment routes
pub fn apartment_routes() -> Router<AppState> {
    Router::new()
        .route("/apartments", get(list_apartments).post(create_apartment))
        .route("/apartments/:id", get(get_apartment).delete(delete_apartment))
        .route("/apartments/:id/images", get(list_images).post(add_image))
        .route("/apartmentclasses", get(list_classes))
}

/// List apartments
#[utoipa::path(
    get,
    path = "/apartments",
    tag = "Apartments",
    params(ApartmentQuery),
    responses(
        (status = 200, description = "Apartments under `items`", body = [Apartment])
    )
)]
pub async fn list_apartments(
    State(state): State<AppState>,
    Query(query): Query<ApartmentQuery>,
) -> AppResult<Json<ItemsResponse<Apartment>>> {
    let apartments = state.apartment_service.list_apartments(query.into()).await?;
    Ok(Json(ItemsResponse::new(apartments)))
}

/// Get an apartment by ID
#[utoipa::path(
    get,
    path = "/apartments/{id}",
    tag = "Apartments",
    params(("id" = i32, Path, description = "Apartment ID")),
    responses(
        (status = 200, description = "Apartment", body = Apartment),
        (status = 404, description = "Apartment not found")
    )
)]
pub async fn get_apartment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Apartment>> {
    Ok(Json(state.apartment_service.get_apartment(id).await?))
}

/// Create a free apartment
#[utoipa::path(
    post,
    path = "/apartments",
    tag = "Apartments",
    request_body = CreateApartmentRequest,
    responses(
        (status = 201, description = "Apartment created", body = Apartment),
        (status = 404, description = "Hotel or apartment class not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_apartment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateApartmentRequest>,
) -> AppResult<Created<Apartment>> {
    let apartment = state.apartment_service.create_apartment(payload.into()).await?;
    Ok(Created(apartment))
}

/// Delete an apartment
#[utoipa::path(
    delete,
    path = "/apartments/{id}",
    tag = "Apartments",
    params(("id" = i32, Path, description = "Apartment ID")),
    responses(
        (status = 200, description = "Apartment deleted", body = MessageResponse),
        (status = 404, description = "Apartment not found"),
        (status = 409, description = "Apartment has bookings")
    )
)]
pub async fn delete_apartment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.apartment_service.delete_apartment(id).await?;
    Ok(Json(MessageResponse::new("apartment deleted")))
}

/// Images of an apartment
#[utoipa::path(
    get,
    path = "/apartments/{id}/images",
    tag = "Apartments",
    params(("id" = i32, Path, description = "Apartment ID")),
    responses(
        (status = 200, description = "Images under `items`", body = [ApartmentImage]),
        (status = 404, description = "Apartment not found")
    )
)]
pub async fn list_images(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ItemsResponse<ApartmentImage>>> {
    let images = state.apartment_service.list_images(id).await?;
    Ok(Json(ItemsResponse::new(images)))
}

/// Attach an image to an apartment
#[utoipa::path(
    post,
    path = "/apartments/{id}/images",
    tag = "Apartments",
    params(("id" = i32, Path, description = "Apartment ID")),
    request_body = CreateImageRequest,
    responses(
        (status = 201, description = "Image added", body = ApartmentImage),
        (status = 404, description = "Apartment not found")
    )
)]
pub async fn add_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CreateImageRequest>,
) -> AppResult<Created<ApartmentImage>> {
    let image = state
        .apartment_service
        .add_image(NewApartmentImage {
            apartment_id: id,
            address: payload.address,
        })
        .await?;
    Ok(Created(image))
}

/// List apartment classes
#[utoipa::path(
    get,
    path = "/apartmentclasses",
    tag = "Apartments",
    responses(
        (status = 200, description = "Apartment classes under `items`", body = [ApartmentClass])
    )
)]
pub async fn list_classes(
    State(state): State<AppState>,
) -> AppResult<Json<ItemsResponse<ApartmentClass>>> {
    let classes = state.apartment_service.list_classes().await?;
    Ok(Json(ItemsResponse::new(classes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_maps_to_nightly_rate() {
        let req: CreateApartmentRequest = serde_json::from_str(
            r#"{"name":"Suite 7","bed_count":2,"price":100,"apartment_class_id":1,"hotel_id":1}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());

        let apartment = NewApartment::from(req);
        assert_eq!(apartment.price_per_night, 100);
    }

    #[test]
    fn bed_count_is_bounded() {
        let req = CreateApartmentRequest {
            name: "Dorm".to_string(),
            bed_count: 0,
            price: 10,
            apartment_class_id: 1,
            hotel_id: 1,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn class_query_parameter_is_renamed() {
        let query: ApartmentQuery = serde_json::from_str(r#"{"class":"lux"}"#).unwrap();
        assert_eq!(ApartmentFilter::from(query).class_name.as_deref(), Some("lux"));
    }
}
