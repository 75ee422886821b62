//! Application route configuration.

use axum::{
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method},
    middleware, Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    apartment_routes, booking_routes, guest_routes, health_routes, hotel_routes, private_routes,
    session_routes,
};
use super::middleware::session_middleware;
use super::openapi::ApiDoc;
use super::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(health_routes())
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(guest_routes())
        .merge(hotel_routes())
        .merge(apartment_routes())
        .merge(booking_routes())
        .merge(session_routes())
        // Session-gated routes
        .nest(
            "/private",
            private_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                session_middleware,
            )),
        )
        // Global middleware; the last layer added runs first
        .layer(cors_layer(&state))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .with_state(state)
}

/// CORS for the configured front-end origin, with credentials
fn cors_layer(state: &AppState) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    match HeaderValue::from_str(&state.config.cors.allowed_origin) {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!(
                origin = %state.config.cors.allowed_origin,
                "Invalid CORS origin, cross-origin requests are disabled"
            );
            layer
        }
    }
}
