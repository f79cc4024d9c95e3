//! Booking notification dispatch.
//!
//! The single path every booking event goes through: validate the request,
//! resolve the recipient's token, render the copy, build the payload, hand
//! it to the push transport. One shot per call; no retries, no shared state
//! across invocations.

mod dispatcher;

use thiserror::Error;

pub use dispatcher::{BookingDispatcher, DispatcherStats, DispatcherStatsSnapshot};

use crate::token::TokenStoreError;

/// Dispatch failure taxonomy.
///
/// Every variant is caught at the HTTP boundary and collapsed into one of
/// two client-visible codes: `not-found` for `RecipientUnreachable`,
/// `internal` for everything else.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Required request fields missing or empty
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No push token on file for the recipient
    #[error("FCM token not found for {role}")]
    RecipientUnreachable { role: &'static str },

    /// The token store could not answer. Kept distinct from
    /// `RecipientUnreachable` so an infrastructure fault is not reported as
    /// a missing registration.
    #[error(transparent)]
    TokenLookup(#[from] TokenStoreError),

    /// Event tag does not name a known booking event
    #[error("unsupported event type: {0}")]
    UnsupportedEventType(String),

    /// The transport refused or failed the send. The transport's own error
    /// is logged at the dispatch site and never travels to the caller.
    #[error("failed to send notification")]
    DeliveryFailed,
}

/// Result type for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_unreachable_wording() {
        let err = DispatchError::RecipientUnreachable { role: "provider" };
        assert_eq!(err.to_string(), "FCM token not found for provider");
    }

    #[test]
    fn test_delivery_failed_hides_detail() {
        // Transport detail goes to the log, not to the caller-facing message.
        assert_eq!(
            DispatchError::DeliveryFailed.to_string(),
            "failed to send notification"
        );
    }
}
