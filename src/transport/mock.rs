//! Development and test transports.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{PushPayload, PushTransport, TransportError};

/// Log-only transport used when FCM is disabled
pub struct NoopTransport;

#[async_trait]
impl PushTransport for NoopTransport {
    async fn send(&self, payload: &PushPayload) -> Result<(), TransportError> {
        tracing::info!(
            event = %payload.data.event,
            booking_id = %payload.data.booking_id,
            title = %payload.title,
            "Push transport disabled, dropping notification"
        );
        Ok(())
    }

    fn transport_name(&self) -> &'static str {
        "noop"
    }
}

/// Recording transport for tests.
///
/// Captures every payload it is asked to send and can be switched into a
/// failing mode to exercise delivery error paths.
#[derive(Debug, Default)]
pub struct MockTransport {
    sent: Mutex<Vec<PushPayload>>,
    fail: AtomicBool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail
    pub fn fail_sends(&self, fail: bool) {
        self.fail.store(fail, Ordering::Relaxed);
    }

    /// Payloads sent so far, in order
    pub fn sent(&self) -> Vec<PushPayload> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    /// Number of send attempts that were accepted
    pub fn sent_count(&self) -> usize {
        self.sent.lock().map(|sent| sent.len()).unwrap_or(0)
    }
}

#[async_trait]
impl PushTransport for MockTransport {
    async fn send(&self, payload: &PushPayload) -> Result<(), TransportError> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(TransportError::Rejected {
                status: 503,
                detail: "mock transport failing".to_string(),
            });
        }

        if let Ok(mut sent) = self.sent.lock() {
            sent.push(payload.clone());
        }
        Ok(())
    }

    fn transport_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingEvent;
    use crate::token::DeviceToken;
    use crate::transport::PayloadData;

    fn payload() -> PushPayload {
        PushPayload {
            token: DeviceToken::new("tok1"),
            title: "t".to_string(),
            body: "b".to_string(),
            data: PayloadData {
                event: BookingEvent::Created,
                booking_id: "b1".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_mock_records_sends() {
        let transport = MockTransport::new();
        transport.send(&payload()).await.unwrap();
        transport.send(&payload()).await.unwrap();
        assert_eq!(transport.sent_count(), 2);
        assert_eq!(transport.sent()[0].data.booking_id, "b1");
    }

    #[tokio::test]
    async fn test_mock_failure_mode() {
        let transport = MockTransport::new();
        transport.fail_sends(true);
        let err = transport.send(&payload()).await.unwrap_err();
        assert!(matches!(err, TransportError::Rejected { status: 503, .. }));
        assert_eq!(transport.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_noop_accepts_everything() {
        let transport = NoopTransport;
        assert!(transport.send(&payload()).await.is_ok());
    }
}
