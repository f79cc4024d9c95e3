//! Request and response models for the HTTP notification API.
//!
//! Each typed request names its recipient field the way the calling app
//! does (`providerId`, `recipientId`, `seekerId`); all of them convert into
//! the same `DispatchRequest`.

use serde::{Deserialize, Serialize};

use crate::booking::{DispatchRequest, EventDetails, EventFields};

/// Request for a booking-created notification, addressed to the provider
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedRequest {
    pub provider_id: String,
    pub booking_id: String,
    pub seeker_name: String,
    pub service_name: String,
}

impl From<BookingCreatedRequest> for DispatchRequest {
    fn from(req: BookingCreatedRequest) -> Self {
        DispatchRequest::new(
            req.provider_id,
            req.booking_id,
            EventDetails::Created {
                seeker_name: req.seeker_name,
                service_name: req.service_name,
            },
        )
    }
}

/// Request for a booking-confirmed notification, addressed to the provider
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmedRequest {
    pub provider_id: String,
    pub booking_id: String,
    pub seeker_name: String,
    pub service_name: String,
}

impl From<BookingConfirmedRequest> for DispatchRequest {
    fn from(req: BookingConfirmedRequest) -> Self {
        DispatchRequest::new(
            req.provider_id,
            req.booking_id,
            EventDetails::Confirmed {
                seeker_name: req.seeker_name,
                service_name: req.service_name,
            },
        )
    }
}

/// Request for a booking-cancelled notification.
///
/// Cancellation can go either direction, so the caller addresses whichever
/// party is on the receiving end.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCancelledRequest {
    pub recipient_id: String,
    pub booking_id: String,
    pub canceller_name: String,
    pub service_name: String,
    #[serde(default)]
    pub is_cancelled_by_provider: bool,
}

impl From<BookingCancelledRequest> for DispatchRequest {
    fn from(req: BookingCancelledRequest) -> Self {
        DispatchRequest::new(
            req.recipient_id,
            req.booking_id,
            EventDetails::Cancelled {
                canceller_name: req.canceller_name,
                service_name: req.service_name,
                cancelled_by_provider: req.is_cancelled_by_provider,
            },
        )
    }
}

/// Request for a booking-completed notification, addressed to the seeker
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCompletedRequest {
    pub seeker_id: String,
    pub booking_id: String,
    pub provider_name: String,
    pub service_name: String,
}

impl From<BookingCompletedRequest> for DispatchRequest {
    fn from(req: BookingCompletedRequest) -> Self {
        DispatchRequest::new(
            req.seeker_id,
            req.booking_id,
            EventDetails::Completed {
                provider_name: req.provider_name,
                service_name: req.service_name,
            },
        )
    }
}

/// Request for a booking-accepted notification, addressed to the seeker
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingAcceptedRequest {
    pub seeker_id: String,
    pub booking_id: String,
    pub provider_name: String,
    pub service_name: String,
}

impl From<BookingAcceptedRequest> for DispatchRequest {
    fn from(req: BookingAcceptedRequest) -> Self {
        DispatchRequest::new(
            req.seeker_id,
            req.booking_id,
            EventDetails::Accepted {
                provider_name: req.provider_name,
                service_name: req.service_name,
            },
        )
    }
}

/// Generic send request keyed by event wire tag
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendBookingNotificationRequest {
    /// Event wire tag, e.g. "booking_created"
    pub event: String,
    pub recipient_id: String,
    pub booking_id: String,
    /// Display fields; which ones are required depends on the event
    #[serde(flatten)]
    pub fields: EventFields,
}

/// Response for notification send operations
#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub success: bool,
}

impl SendResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
