//! Session handlers: cookie login, logout and the private area.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::Guest;

use super::PHONE_NUMBER;
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentGuest;
use crate::api::AppState;
use crate::config::SESSION_COOKIE_NAME;
use crate::types::MessageResponse;

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(regex(path = *PHONE_NUMBER, message = "phone_number must contain only digits and an optional leading +"))]
    #[schema(example = "+79991234567")]
    pub phone_number: String,
}

/// Body returned next to the session cookie
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    #[serde(rename = "user")]
    pub guest: Guest,
    /// Session lifetime in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Create session routes
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/sessions", post(login).delete(logout))
}

/// Routes behind the session middleware
pub fn private_routes() -> Router<AppState> {
    Router::new().route("/whoami", get(whoami))
}

/// Open a session
#[utoipa::path(
    post,
    path = "/sessions",
    tag = "Sessions",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session cookie set", body = SessionResponse),
        (status = 401, description = "Incorrect number"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<SessionResponse>)> {
    let session = state.session_service.login(&payload.phone_number).await?;

    let cookie = Cookie::build((SESSION_COOKIE_NAME, session.token))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax);

    Ok((
        jar.add(cookie),
        Json(SessionResponse {
            guest: session.guest,
            expires_in: session.max_age,
        }),
    ))
}

/// Close the session
#[utoipa::path(
    delete,
    path = "/sessions",
    tag = "Sessions",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    )
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/"));
    (jar, Json(MessageResponse::new("session closed")))
}

/// The guest owning the current session
#[utoipa::path(
    get,
    path = "/private/whoami",
    tag = "Sessions",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Current guest", body = Guest),
        (status = 401, description = "Missing or invalid session")
    )
)]
pub async fn whoami(Extension(CurrentGuest(guest)): Extension<CurrentGuest>) -> Json<Guest> {
    Json(guest)
}
