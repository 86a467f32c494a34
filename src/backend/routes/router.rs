/**
 * Router Configuration
 *
 * Combines the route groups into one Axum router and wraps it in the
 * HTTP layers:
 *
 * 1. User routes (`/api/v1/user`)
 * 2. Post and comment routes (`/api/v1/post`)
 * 3. JSON 404 fallback
 * 4. `TraceLayer` for request logging
 * 5. `CorsLayer` when an allowed origin is configured
 */

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::auth::handlers::MessageResponse;
use crate::backend::routes::post_routes::configure_post_routes;
use crate::backend::routes::user_routes::configure_user_routes;
use crate::backend::server::state::AppState;

/// Fallback for unknown routes
pub async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(MessageResponse::new("Route not found.")))
}

/// CORS layer for the configured frontend origin
///
/// Cookies are sent cross-origin, so credentials are allowed and the origin
/// has to be explicit. Returns `None` when no usable origin is configured.
pub fn cors_layer(origin: Option<&str>) -> Option<CorsLayer> {
    let origin = origin?;
    let origin = match HeaderValue::from_str(origin) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Ignoring invalid ORIGIN_BASE_URL {:?}: {}", origin, e);
            return None;
        }
    };

    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([CONTENT_TYPE]),
    )
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Store, token service and configuration
///
/// # Returns
///
/// Router ready to be served
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_user_routes(Router::new());
    let router = configure_post_routes(router);

    let router = router
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http());

    let router = match cors_layer(app_state.config.allowed_origin.as_deref()) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.with_state(app_state)
}
