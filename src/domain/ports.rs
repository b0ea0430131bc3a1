use crate::error::Result;
use async_trait::async_trait;

/// An encoded request ready to be sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub endpoint: String,
    pub body: String,
}

/// Moves an [`OutboundMessage`] to the gateway and returns the raw response body.
///
/// Timeouts, TLS and retries are the implementation's business.
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    async fn send(&self, message: OutboundMessage) -> Result<String>;
}

pub type GatewayTransportBox = Box<dyn GatewayTransport>;
