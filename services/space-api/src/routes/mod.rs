use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::handlers::{
    alerts, chat_response, get_apod, get_space_images, health_check, register, space_debris,
};
use crate::middleware::{rate_limit_middleware, request_logging_middleware};
use crate::state::AppState;

/// Create the main application router with all routes
pub fn create_router(state: AppState) -> Router {
    // Only registration is rate limited; the proxying routes always answer 200
    let api = Router::new()
        .route("/apod/", get(get_apod))
        .route("/space-images/", get(get_space_images))
        .route(
            "/chat/",
            // The handler bounds the body itself and degrades on overflow
            post(chat_response).layer(DefaultBodyLimit::disable()),
        )
        .route("/debris/", get(space_debris))
        .route("/alerts/", get(alerts))
        .route(
            "/register/",
            post(register).layer(middleware::from_fn_with_state(
                state.clone(),
                rate_limit_middleware,
            )),
        );

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
