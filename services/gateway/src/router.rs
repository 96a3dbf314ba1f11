use crate::handlers::{checkout, events};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/events/{event_id}", get(events::get_event))
        .route("/events/{event_id}/tickets", get(events::get_tickets))
        .route("/events/{event_id}/addons", get(events::get_addons))
        .route("/events/{event_id}/validate", post(checkout::validate_cart));

    Router::new()
        .route("/", get(events::service_info))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
