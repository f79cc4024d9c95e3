//! Push transport: the send-by-token boundary.
//!
//! The dispatcher hands a fully-built payload to a `PushTransport` and treats
//! the call as a single external round-trip. No retry or backoff lives here;
//! a failed send is reported back and the caller decides what to surface.

mod fcm;
mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;

pub use fcm::FcmTransport;
pub use mock::{MockTransport, NoopTransport};

use crate::booking::BookingEvent;
use crate::config::FcmConfig;
use crate::token::DeviceToken;

/// Android notification channel all booking pushes are delivered on
pub const NOTIFICATION_CHANNEL_ID: &str = "booking_notifications";

/// Structured data attached to every booking notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadData {
    pub event: BookingEvent,
    pub booking_id: String,
}

/// Outbound notification, built fresh per dispatch and never persisted
#[derive(Debug, Clone)]
pub struct PushPayload {
    pub token: DeviceToken,
    pub title: String,
    pub body: String,
    pub data: PayloadData,
}

impl PushPayload {
    /// Serialize to the FCM v1 message shape.
    ///
    /// Delivery hints are fixed: high priority, default sound, the single
    /// booking notification channel. FCM requires `data` values to be
    /// strings.
    pub fn to_message_json(&self) -> Value {
        json!({
            "message": {
                "token": self.token.as_str(),
                "notification": {
                    "title": self.title,
                    "body": self.body,
                },
                "data": {
                    "type": self.data.event.tag(),
                    "bookingId": self.data.booking_id,
                },
                "android": {
                    "priority": "high",
                    "notification": {
                        "sound": "default",
                        "channel_id": NOTIFICATION_CHANNEL_ID,
                    },
                },
                "apns": {
                    "payload": {
                        "aps": {
                            "sound": "default",
                        },
                    },
                },
            },
        })
    }
}

/// Error type for transport operations
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never completed (connect failure, timeout)
    #[error("push request failed: {0}")]
    Request(String),

    /// The push service answered with a non-success status
    #[error("push rejected with status {status}: {detail}")]
    Rejected { status: u16, detail: String },
}

/// Send-by-token primitive
#[async_trait]
pub trait PushTransport: Send + Sync {
    /// Deliver one payload. At most one attempt per call.
    async fn send(&self, payload: &PushPayload) -> Result<(), TransportError>;

    /// Name of the transport, for health reporting
    fn transport_name(&self) -> &'static str;
}

/// Create a push transport based on configuration.
///
/// FCM disabled means a log-only transport; useful for local development
/// where no service credentials exist.
pub fn create_transport(config: &FcmConfig) -> Arc<dyn PushTransport> {
    if config.enabled {
        tracing::info!(
            project_id = %config.project_id,
            "Creating FCM push transport"
        );
        Arc::new(FcmTransport::new(config))
    } else {
        tracing::warn!("FCM disabled, using log-only push transport");
        Arc::new(NoopTransport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> PushPayload {
        PushPayload {
            token: DeviceToken::new("tok1"),
            title: "New Booking Request".to_string(),
            body: "Alice has requested a booking for Haircut.".to_string(),
            data: PayloadData {
                event: BookingEvent::Created,
                booking_id: "b42".to_string(),
            },
        }
    }

    #[test]
    fn test_message_json_shape() {
        let message = sample_payload().to_message_json();
        let message = &message["message"];

        assert_eq!(message["token"], "tok1");
        assert_eq!(message["notification"]["title"], "New Booking Request");
        assert_eq!(
            message["notification"]["body"],
            "Alice has requested a booking for Haircut."
        );
        assert_eq!(message["data"]["type"], "booking_created");
        assert_eq!(message["data"]["bookingId"], "b42");
        assert_eq!(message["android"]["priority"], "high");
        assert_eq!(message["android"]["notification"]["sound"], "default");
        assert_eq!(
            message["android"]["notification"]["channel_id"],
            "booking_notifications"
        );
        assert_eq!(message["apns"]["payload"]["aps"]["sound"], "default");
    }

    #[test]
    fn test_data_values_are_strings() {
        let message = sample_payload().to_message_json();
        let data = &message["message"]["data"];
        assert!(data["type"].is_string());
        assert!(data["bookingId"].is_string());
    }

    #[test]
    fn test_payload_debug_hides_token() {
        let rendered = format!("{:?}", sample_payload());
        assert!(!rendered.contains("tok1"));
    }
}
