//! FCM HTTP v1 push transport.

use std::time::Duration;

use async_trait::async_trait;

use super::{PushPayload, PushTransport, TransportError};
use crate::config::FcmConfig;

/// Sends notifications through the FCM HTTP v1 API.
///
/// Authentication uses a pre-minted OAuth bearer token from configuration;
/// minting and refreshing service-account credentials is left to the
/// deployment environment.
pub struct FcmTransport {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl FcmTransport {
    pub fn new(config: &FcmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_default();

        let endpoint = config.endpoint.clone().unwrap_or_else(|| {
            format!(
                "https://fcm.googleapis.com/v1/projects/{}/messages:send",
                config.project_id
            )
        });

        Self {
            client,
            endpoint,
            access_token: config.access_token.clone(),
        }
    }
}

#[async_trait]
impl PushTransport for FcmTransport {
    async fn send(&self, payload: &PushPayload) -> Result<(), TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(&payload.to_message_json())
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(event = %payload.data.event, "FCM message accepted");
            return Ok(());
        }

        let detail = response
            .text()
            .await
            .unwrap_or_else(|_| "no response body".to_string());

        Err(TransportError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }

    fn transport_name(&self) -> &'static str {
        "fcm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_includes_project() {
        let config = FcmConfig {
            enabled: true,
            project_id: "bookings-prod".to_string(),
            access_token: "token".to_string(),
            endpoint: None,
            timeout_seconds: 10,
        };
        let transport = FcmTransport::new(&config);
        assert_eq!(
            transport.endpoint,
            "https://fcm.googleapis.com/v1/projects/bookings-prod/messages:send"
        );
    }

    #[test]
    fn test_endpoint_override() {
        let config = FcmConfig {
            enabled: true,
            project_id: "unused".to_string(),
            access_token: "token".to_string(),
            endpoint: Some("http://localhost:9099/send".to_string()),
            timeout_seconds: 10,
        };
        let transport = FcmTransport::new(&config);
        assert_eq!(transport.endpoint, "http://localhost:9099/send");
    }
}
