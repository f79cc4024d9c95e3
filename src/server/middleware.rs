use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

use super::AppState;

/// API Key authentication middleware.
///
/// Validates the X-API-Key header against the configured `api.key`. With no
/// key configured all requests pass, which is the development default.
pub async fn api_key_auth(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    let Some(expected_key) = &state.settings.api.key else {
        return next.run(req).await;
    };

    let provided = req
        .headers()
        .get("X-API-Key")
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if key == expected_key => next.run(req).await,
        Some(_) => {
            tracing::warn!("Invalid API key provided");
            AppError::Auth("invalid API key".to_string()).into_response()
        }
        None => {
            tracing::warn!("Missing API key header");
            AppError::Auth("missing API key".to_string()).into_response()
        }
    }
}
