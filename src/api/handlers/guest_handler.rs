//! Guest handlers.

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
use domain::{Guest, NewGuest};

use super::PHONE_NUMBER;
use crate::api::extractors::{Path, ValidatedJson};
use crate::api::AppState;
use crate::types::{Created, ItemsResponse, MessageResponse};

/// Guest registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGuestRequest {
    /// Last name
    #[serde(rename = "l_name")]
    #[validate(length(min = 3, max = 20, message = "l_name must be 3 to 20 characters long"))]
    #[schema(example = "Petrov")]
    pub last_name: String,
    /// First name
    #[serde(rename = "f_name")]
    #[validate(length(min = 1, max = 20, message = "f_name must be 1 to 20 characters long"))]
    #[schema(example = "Petr")]
    pub first_name: String,
    /// Contact phone number, unique per guest
    #[validate(
        length(min = 11, max = 14, message = "phone_number must be 11 to 14 characters long"),
        regex(path = *PHONE_NUMBER, message = "phone_number must contain only digits and an optional leading +")
    )]
    #[schema(example = "+79991234567")]
    pub phone_number: String,
}

impl From<CreateGuestRequest> for NewGuest {
    fn from(req: CreateGuestRequest) -> Self {
        NewGuest {
            last_name: req.last_name,
            first_name: req.first_name,
            phone_number: req.phone_number,
        }
    }
}

/// Create guest routes
pub fn guest_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_guest).get(list_guests))
        .route("/users/:phone_number", get(get_guest).delete(delete_guest))
}

/// Register a guest
#[utoipa::path(
    post,
    path = "/users",
    tag = "Guests",
    request_body = CreateGuestRequest,
    responses(
        (status = 201, description = "Guest registered", body = Guest),
        (status = 400, description = "Malformed JSON"),
        (status = 409, description = "Phone number already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_guest(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateGuestRequest>,
) -> AppResult<Created<Guest>> {
    let guest = state.guest_service.register(payload.into()).await?;
    Ok(Created(guest))
}

/// List all guests
#[utoipa::path(
    get,
    path = "/users",
    tag = "Guests",
    responses(
        (status = 200, description = "All guests under `items`", body = [Guest])
    )
)]
pub async fn list_guests(State(state): State<AppState>) -> AppResult<Json<ItemsResponse<Guest>>> {
    let guests = state.guest_service.list_guests().await?;
    Ok(Json(ItemsResponse::new(guests)))
}

/// Get a guest by phone number
#[utoipa::path(
    get,
    path = "/users/{phone_number}",
    tag = "Guests",
    params(("phone_number" = String, Path, description = "Guest phone number")),
    responses(
        (status = 200, description = "Guest", body = Guest),
        (status = 404, description = "Guest not found")
    )
)]
pub async fn get_guest(
    State(state): State<AppState>,
    Path(phone_number): Path<String>,
) -> AppResult<Json<Guest>> {
    let guest = state.guest_service.get_guest_by_phone(&phone_number).await?;
    Ok(Json(guest))
}

/// Delete a guest by phone number
#[utoipa::path(
    delete,
    path = "/users/{phone_number}",
    tag = "Guests",
    params(("phone_number" = String, Path, description = "Guest phone number")),
    responses(
        (status = 200, description = "Guest deleted", body = MessageResponse),
        (status = 404, description = "No guest with this phone number"),
        (status = 409, description = "Guest has bookings")
    )
)]
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(phone_number): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.guest_service.delete_guest(&phone_number).await?;
    Ok(Json(MessageResponse::new("user deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(last_name: &str, phone_number: &str) -> CreateGuestRequest {
        CreateGuestRequest {
            last_name: last_name.to_string(),
            first_name: "Petr".to_string(),
            phone_number: phone_number.to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_guest() {
        assert!(request("Petrov", "+79991234567").validate().is_ok());
    }

    #[test]
    fn rejects_short_last_name() {
        assert!(request("Li", "+79991234567").validate().is_err());
    }

    #[test]
    fn rejects_bad_phone_numbers() {
        assert!(request("Petrov", "12345").validate().is_err());
        assert!(request("Petrov", "+7999123456789012").validate().is_err());
        assert!(request("Petrov", "+7(999)123-45").validate().is_err());
    }

    #[test]
    fn reads_short_field_names() {
        let req: CreateGuestRequest = serde_json::from_str(
            r#"{"l_name":"Petrov","f_name":"Petr","phone_number":"+79991234567"}"#,
        )
        .unwrap();
        assert_eq!(req.last_name, "Petrov");
        assert_eq!(req.first_name, "Petr");
    }
}
