use crate::domain::ports::{GatewayTransport, OutboundMessage};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

/// Posts XML documents to the gateway over HTTPS.
///
/// Shares one `reqwest::Client` (and its connection pool) across calls.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a caller-configured client, e.g. one with timeouts or a proxy.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GatewayTransport for HttpTransport {
    async fn send(&self, message: OutboundMessage) -> Result<String> {
        tracing::debug!(endpoint = %message.endpoint, bytes = message.body.len(), "posting to gateway");

        let response = self
            .client
            .post(&message.endpoint)
            .header(CONTENT_TYPE, "application/xml")
            .body(message.body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "gateway returned an error status");
            return Err(PaymentError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
