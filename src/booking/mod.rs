use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dispatch::DispatchError;

/// Booking lifecycle events that trigger a push notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingEvent {
    Created,
    Confirmed,
    Cancelled,
    Completed,
    Accepted,
}

impl BookingEvent {
    /// All event types, in lifecycle order
    pub const ALL: [BookingEvent; 5] = [
        BookingEvent::Created,
        BookingEvent::Confirmed,
        BookingEvent::Cancelled,
        BookingEvent::Completed,
        BookingEvent::Accepted,
    ];

    /// Wire tag carried in the notification `data.type` field
    pub fn tag(&self) -> &'static str {
        match self {
            BookingEvent::Created => "booking_created",
            BookingEvent::Confirmed => "booking_confirmed",
            BookingEvent::Cancelled => "booking_cancelled",
            BookingEvent::Completed => "booking_completed",
            BookingEvent::Accepted => "booking_accepted",
        }
    }

    /// Parse a wire tag back into an event type
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "booking_created" => Some(BookingEvent::Created),
            "booking_confirmed" => Some(BookingEvent::Confirmed),
            "booking_cancelled" => Some(BookingEvent::Cancelled),
            "booking_completed" => Some(BookingEvent::Completed),
            "booking_accepted" => Some(BookingEvent::Accepted),
            _ => None,
        }
    }
}

impl fmt::Display for BookingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Display fields for a booking event, one variant per event type.
///
/// Each variant carries exactly the fields its notification body needs, so a
/// request can never mix an event with fields that don't belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDetails {
    Created {
        seeker_name: String,
        service_name: String,
    },
    Confirmed {
        seeker_name: String,
        service_name: String,
    },
    Cancelled {
        canceller_name: String,
        service_name: String,
        cancelled_by_provider: bool,
    },
    Completed {
        provider_name: String,
        service_name: String,
    },
    Accepted {
        provider_name: String,
        service_name: String,
    },
}

impl EventDetails {
    /// The event type these details belong to
    pub fn event(&self) -> BookingEvent {
        match self {
            EventDetails::Created { .. } => BookingEvent::Created,
            EventDetails::Confirmed { .. } => BookingEvent::Confirmed,
            EventDetails::Cancelled { .. } => BookingEvent::Cancelled,
            EventDetails::Completed { .. } => BookingEvent::Completed,
            EventDetails::Accepted { .. } => BookingEvent::Accepted,
        }
    }

    /// Assemble details for `event` from a loose field set.
    ///
    /// Used by the generic send endpoint, where the event arrives as a wire
    /// tag and the display fields are all optional at the JSON layer.
    pub fn from_fields(event: BookingEvent, fields: EventFields) -> Result<Self, DispatchError> {
        fn require(value: Option<String>, name: &str, event: BookingEvent) -> Result<String, DispatchError> {
            value.ok_or_else(|| {
                DispatchError::InvalidRequest(format!("missing field `{}` for event {}", name, event))
            })
        }

        match event {
            BookingEvent::Created => Ok(EventDetails::Created {
                seeker_name: require(fields.seeker_name, "seekerName", event)?,
                service_name: require(fields.service_name, "serviceName", event)?,
            }),
            BookingEvent::Confirmed => Ok(EventDetails::Confirmed {
                seeker_name: require(fields.seeker_name, "seekerName", event)?,
                service_name: require(fields.service_name, "serviceName", event)?,
            }),
            BookingEvent::Cancelled => Ok(EventDetails::Cancelled {
                canceller_name: require(fields.canceller_name, "cancellerName", event)?,
                service_name: require(fields.service_name, "serviceName", event)?,
                cancelled_by_provider: fields.is_cancelled_by_provider.unwrap_or(false),
            }),
            BookingEvent::Completed => Ok(EventDetails::Completed {
                provider_name: require(fields.provider_name, "providerName", event)?,
                service_name: require(fields.service_name, "serviceName", event)?,
            }),
            BookingEvent::Accepted => Ok(EventDetails::Accepted {
                provider_name: require(fields.provider_name, "providerName", event)?,
                service_name: require(fields.service_name, "serviceName", event)?,
            }),
        }
    }
}

/// Loose display field set accepted by the generic send endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFields {
    pub seeker_name: Option<String>,
    pub service_name: Option<String>,
    pub provider_name: Option<String>,
    pub canceller_name: Option<String>,
    pub is_cancelled_by_provider: Option<bool>,
}

/// A single booking notification request, ready for dispatch
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    /// User whose device receives the notification
    pub recipient_id: String,
    /// Booking the event refers to, echoed in the payload data
    pub booking_id: String,
    /// Event type and its display fields
    pub details: EventDetails,
}

impl DispatchRequest {
    pub fn new(recipient_id: impl Into<String>, booking_id: impl Into<String>, details: EventDetails) -> Self {
        Self {
            recipient_id: recipient_id.into(),
            booking_id: booking_id.into(),
            details,
        }
    }

    /// A request is dispatchable only with a non-empty recipient and booking id
    pub fn validate(&self) -> Result<(), DispatchError> {
        if self.recipient_id.is_empty() {
            return Err(DispatchError::InvalidRequest(
                "recipientId must not be empty".to_string(),
            ));
        }
        if self.booking_id.is_empty() {
            return Err(DispatchError::InvalidRequest(
                "bookingId must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
