use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::server::{api_key_auth, AppState};
use crate::triggers::{
    booking_accepted, booking_cancelled, booking_completed, booking_confirmed, booking_created,
    send_booking_notification,
};

use super::health::{health, metrics, stats};

pub fn api_routes(state: AppState) -> Router<AppState> {
    // Notification endpoints sit behind the optional API key check;
    // health and metrics stay open for probes and scrapers.
    let notifications = Router::new()
        .route("/booking-created", post(booking_created))
        .route("/booking-confirmed", post(booking_confirmed))
        .route("/booking-cancelled", post(booking_cancelled))
        .route("/booking-completed", post(booking_completed))
        .route("/booking-accepted", post(booking_accepted))
        .route("/send", post(send_booking_notification))
        .route_layer(middleware::from_fn_with_state(state, api_key_auth));

    Router::new()
        // Health & Stats
        .route("/health", get(health))
        .route("/stats", get(stats))
        .route("/metrics", get(metrics))
        // Notification endpoints
        .nest("/api/v1/notifications", notifications)
}
