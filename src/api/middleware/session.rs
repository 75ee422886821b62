//! Cookie session middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use common::{AppError, AppResult};
use domain::Guest;

use crate::api::AppState;
use crate::config::SESSION_COOKIE_NAME;

/// Guest resolved from the session cookie
#[derive(Clone, Debug)]
pub struct CurrentGuest(pub Guest);

/// Session middleware.
///
/// Reads the session cookie, verifies the token and re-loads the guest,
/// then injects [`CurrentGuest`] into the request extensions.
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let token = jar
        .get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_owned())
        .ok_or(AppError::Unauthorized)?;

    let guest = state.session_service.authenticate(&token).await?;
    tracing::debug!(guest_id = guest.id, "Session accepted");

    request.extensions_mut().insert(CurrentGuest(guest));

    Ok(next.run(request).await)
}
