use crate::errors::AppError;
use crate::models::LeadPayload;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Result of a single webhook delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Destination answered with a success status.
    Delivered,
    /// Destination answered with status >= 400 (or another non-success code).
    FailedStatus(u16),
    /// Request never got a response: connection error or timeout.
    FailedNetwork { timed_out: bool, reason: String },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryOutcome::Delivered => write!(f, "delivered"),
            DeliveryOutcome::FailedStatus(status) => write!(f, "webhook responded with HTTP {}", status),
            DeliveryOutcome::FailedNetwork {
                timed_out: true,
                reason,
            } => write!(f, "webhook timed out: {}", reason),
            DeliveryOutcome::FailedNetwork { reason, .. } => {
                write!(f, "webhook unreachable: {}", reason)
            }
        }
    }
}

/// Outbound channel for finished leads.
///
/// One call, one attempt. Implementations must not retry and must bound the
/// time they spend.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn deliver(&self, url: &str, payload: &LeadPayload) -> DeliveryOutcome;
}

/// Webhook transport backed by a shared reqwest client.
#[derive(Clone)]
pub struct HttpWebhookTransport {
    client: reqwest::Client,
}

impl HttpWebhookTransport {
    /// Creates a new `HttpWebhookTransport`.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Bound on the whole request, connection included.
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to create webhook client: {}", e))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl WebhookTransport for HttpWebhookTransport {
    async fn deliver(&self, url: &str, payload: &LeadPayload) -> DeliveryOutcome {
        tracing::debug!("POST lead {} to webhook", payload.lead_id);

        match self.client.post(url).json(payload).send().await {
            Ok(response) if response.status().is_success() => DeliveryOutcome::Delivered,
            Ok(response) => DeliveryOutcome::FailedStatus(response.status().as_u16()),
            Err(e) => DeliveryOutcome::FailedNetwork {
                timed_out: e.is_timeout(),
                reason: e.to_string(),
            },
        }
    }
}
