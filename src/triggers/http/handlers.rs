//! HTTP notification handlers

use axum::{extract::State, Json};

use crate::booking::{BookingEvent, DispatchRequest, EventDetails};
use crate::dispatch::DispatchError;
use crate::error::Result;
use crate::server::AppState;

use super::models::{
    BookingAcceptedRequest, BookingCancelledRequest, BookingCompletedRequest,
    BookingConfirmedRequest, BookingCreatedRequest, SendBookingNotificationRequest, SendResponse,
};

/// Notify the provider that a booking was requested
#[tracing::instrument(
    name = "http.booking_created",
    skip(state, request),
    fields(booking_id = %request.booking_id)
)]
pub async fn booking_created(
    State(state): State<AppState>,
    Json(request): Json<BookingCreatedRequest>,
) -> Result<Json<SendResponse>> {
    state.dispatcher.dispatch(request.into()).await?;
    Ok(Json(SendResponse::ok()))
}

/// Notify the provider that a booking was confirmed
#[tracing::instrument(
    name = "http.booking_confirmed",
    skip(state, request),
    fields(booking_id = %request.booking_id)
)]
pub async fn booking_confirmed(
    State(state): State<AppState>,
    Json(request): Json<BookingConfirmedRequest>,
) -> Result<Json<SendResponse>> {
    state.dispatcher.dispatch(request.into()).await?;
    Ok(Json(SendResponse::ok()))
}

/// Notify either party that a booking was cancelled
#[tracing::instrument(
    name = "http.booking_cancelled",
    skip(state, request),
    fields(booking_id = %request.booking_id)
)]
pub async fn booking_cancelled(
    State(state): State<AppState>,
    Json(request): Json<BookingCancelledRequest>,
) -> Result<Json<SendResponse>> {
    state.dispatcher.dispatch(request.into()).await?;
    Ok(Json(SendResponse::ok()))
}

/// Notify the seeker that a booking was completed
#[tracing::instrument(
    name = "http.booking_completed",
    skip(state, request),
    fields(booking_id = %request.booking_id)
)]
pub async fn booking_completed(
    State(state): State<AppState>,
    Json(request): Json<BookingCompletedRequest>,
) -> Result<Json<SendResponse>> {
    state.dispatcher.dispatch(request.into()).await?;
    Ok(Json(SendResponse::ok()))
}

/// Notify the seeker that a booking was accepted
#[tracing::instrument(
    name = "http.booking_accepted",
    skip(state, request),
    fields(booking_id = %request.booking_id)
)]
pub async fn booking_accepted(
    State(state): State<AppState>,
    Json(request): Json<BookingAcceptedRequest>,
) -> Result<Json<SendResponse>> {
    state.dispatcher.dispatch(request.into()).await?;
    Ok(Json(SendResponse::ok()))
}

/// Generic send keyed by event wire tag.
///
/// Parses the tag, then assembles the event details from the loose field
/// set; an unknown tag or a missing display field is rejected before any
/// lookup happens.
#[tracing::instrument(
    name = "http.send_booking_notification",
    skip(state, request),
    fields(event = %request.event, booking_id = %request.booking_id)
)]
pub async fn send_booking_notification(
    State(state): State<AppState>,
    Json(request): Json<SendBookingNotificationRequest>,
) -> Result<Json<SendResponse>> {
    let event = BookingEvent::from_tag(&request.event)
        .ok_or_else(|| DispatchError::UnsupportedEventType(request.event.clone()))?;
    let details = EventDetails::from_fields(event, request.fields)?;

    let dispatch = DispatchRequest::new(request.recipient_id, request.booking_id, details);
    state.dispatcher.dispatch(dispatch).await?;
    Ok(Json(SendResponse::ok()))
}
