//! Notification template registry.
//!
//! One table entry per booking event, carrying the fixed title and the
//! recipient role the endpoint addresses. Body rendering is a pure function
//! of the event details, so the same input always produces the same copy.

use crate::booking::{BookingEvent, EventDetails};

/// Rendered notification copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContent {
    pub title: String,
    pub body: String,
}

/// Registry entry for one booking event
#[derive(Debug, Clone, Copy)]
pub struct EventTemplate {
    pub event: BookingEvent,
    /// Fixed notification title
    pub title: &'static str,
    /// Role of the recipient, used in "token not found for ..." wording
    pub recipient_role: &'static str,
}

static TEMPLATES: [EventTemplate; 5] = [
    EventTemplate {
        event: BookingEvent::Created,
        title: "New Booking Request",
        recipient_role: "provider",
    },
    EventTemplate {
        event: BookingEvent::Confirmed,
        title: "Booking Confirmed",
        recipient_role: "provider",
    },
    EventTemplate {
        event: BookingEvent::Cancelled,
        title: "Booking Cancelled",
        recipient_role: "recipient",
    },
    EventTemplate {
        event: BookingEvent::Completed,
        title: "Booking Completed",
        recipient_role: "seeker",
    },
    EventTemplate {
        event: BookingEvent::Accepted,
        title: "Booking Accepted",
        recipient_role: "seeker",
    },
];

/// Look up the registry entry for an event. Total over the closed enum.
pub fn template_for(event: BookingEvent) -> &'static EventTemplate {
    // The table is ordered to match BookingEvent::ALL; the scan keeps one
    // source-of-truth table without a map allocation.
    TEMPLATES
        .iter()
        .find(|t| t.event == event)
        .unwrap_or(&TEMPLATES[0])
}

/// Render the title and body for a booking event
pub fn render(details: &EventDetails) -> MessageContent {
    let title = template_for(details.event()).title.to_string();
    let body = render_body(details);
    MessageContent { title, body }
}

fn render_body(details: &EventDetails) -> String {
    match details {
        EventDetails::Created {
            seeker_name,
            service_name,
        } => format!("{seeker_name} has requested a booking for {service_name}."),
        EventDetails::Confirmed {
            seeker_name,
            service_name,
        } => format!("Your booking for {service_name} with {seeker_name} has been confirmed."),
        EventDetails::Cancelled {
            canceller_name,
            service_name,
            cancelled_by_provider,
        } => {
            if *cancelled_by_provider {
                format!("{canceller_name} has cancelled your {service_name} booking.")
            } else {
                format!("Your {service_name} booking has been cancelled by {canceller_name}.")
            }
        }
        EventDetails::Completed {
            provider_name,
            service_name,
        } => format!("Your {service_name} booking with {provider_name} has been completed."),
        EventDetails::Accepted {
            provider_name,
            service_name,
        } => format!("{provider_name} has accepted your {service_name} booking."),
    }
}
