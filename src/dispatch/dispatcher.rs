use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::booking::DispatchRequest;
use crate::metrics::{DispatchMetrics, TokenMetrics, SEND_DURATION_SECONDS};
use crate::template;
use crate::token::TokenStore;
use crate::transport::{PayloadData, PushPayload, PushTransport};

use super::{DispatchError, DispatchResult};

/// Counters for the dispatcher, shared across all invocations
#[derive(Debug, Default)]
pub struct DispatcherStats {
    /// Total dispatch attempts
    pub total_dispatched: AtomicU64,
    /// Notifications accepted by the transport
    pub total_delivered: AtomicU64,
    /// Dispatches that failed at any step
    pub total_failed: AtomicU64,
    /// Dispatches rejected because the recipient had no token
    pub total_unreachable: AtomicU64,
}

impl DispatcherStats {
    pub fn snapshot(&self) -> DispatcherStatsSnapshot {
        DispatcherStatsSnapshot {
            total_dispatched: self.total_dispatched.load(Ordering::Relaxed),
            total_delivered: self.total_delivered.load(Ordering::Relaxed),
            total_failed: self.total_failed.load(Ordering::Relaxed),
            total_unreachable: self.total_unreachable.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of dispatcher counters
#[derive(Debug, Clone, Serialize)]
pub struct DispatcherStatsSnapshot {
    pub total_dispatched: u64,
    pub total_delivered: u64,
    pub total_failed: u64,
    pub total_unreachable: u64,
}

/// Translates booking events into push notifications.
///
/// The token store and transport are injected at construction; the
/// dispatcher owns no other state beyond its counters.
pub struct BookingDispatcher {
    token_store: Arc<dyn TokenStore>,
    transport: Arc<dyn PushTransport>,
    stats: DispatcherStats,
}

impl BookingDispatcher {
    pub fn new(token_store: Arc<dyn TokenStore>, transport: Arc<dyn PushTransport>) -> Self {
        Self {
            token_store,
            transport,
            stats: DispatcherStats::default(),
        }
    }

    /// Get dispatcher statistics
    pub fn stats(&self) -> DispatcherStatsSnapshot {
        self.stats.snapshot()
    }

    /// Dispatch one booking notification.
    ///
    /// Validate, resolve the token, render, send. Exactly one transport
    /// attempt; concurrent calls for the same booking are neither
    /// deduplicated nor serialized.
    #[tracing::instrument(
        name = "dispatch.booking",
        skip(self, request),
        fields(
            notification_id = %Uuid::new_v4(),
            event = %request.details.event(),
            recipient_id = %request.recipient_id,
            booking_id = %request.booking_id,
        )
    )]
    pub async fn dispatch(&self, request: DispatchRequest) -> DispatchResult<()> {
        self.stats.total_dispatched.fetch_add(1, Ordering::Relaxed);
        let event = request.details.event();

        if let Err(e) = request.validate() {
            self.stats.total_failed.fetch_add(1, Ordering::Relaxed);
            DispatchMetrics::record_invalid(event.tag());
            tracing::warn!(error = %e, "Rejected undispatchable request");
            return Err(e);
        }

        let entry = template::template_for(event);

        let token = match self.token_store.token_for(&request.recipient_id).await {
            Ok(Some(token)) => {
                TokenMetrics::record_hit();
                token
            }
            Ok(None) => {
                self.stats.total_failed.fetch_add(1, Ordering::Relaxed);
                self.stats.total_unreachable.fetch_add(1, Ordering::Relaxed);
                TokenMetrics::record_miss();
                DispatchMetrics::record_no_token(event.tag());
                tracing::warn!(role = entry.recipient_role, "No token on file for recipient");
                return Err(DispatchError::RecipientUnreachable {
                    role: entry.recipient_role,
                });
            }
            Err(e) => {
                self.stats.total_failed.fetch_add(1, Ordering::Relaxed);
                TokenMetrics::record_error();
                DispatchMetrics::record_lookup_error(event.tag());
                tracing::error!(error = %e, "Token lookup failed");
                return Err(e.into());
            }
        };

        let content = template::render(&request.details);
        let payload = PushPayload {
            token,
            title: content.title,
            body: content.body,
            data: PayloadData {
                event,
                booking_id: request.booking_id.clone(),
            },
        };

        let timer = SEND_DURATION_SECONDS.start_timer();
        let sent = self.transport.send(&payload).await;
        timer.observe_duration();

        match sent {
            Ok(()) => {
                self.stats.total_delivered.fetch_add(1, Ordering::Relaxed);
                DispatchMetrics::record_delivered(event.tag());
                tracing::info!("Notification delivered");
                Ok(())
            }
            Err(e) => {
                self.stats.total_failed.fetch_add(1, Ordering::Relaxed);
                DispatchMetrics::record_send_error(event.tag());
                // The transport detail stays in the log; callers only see a
                // generic delivery failure.
                tracing::error!(error = %e, "Push transport send failed");
                Err(DispatchError::DeliveryFailed)
            }
        }
    }
}
