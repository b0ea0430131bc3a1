use crate::domain::ports::{GatewayTransport, OutboundMessage};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A scripted transport that answers with queued bodies and records every request.
///
/// Cloning shares the queue and the log, so a test can keep a handle after
/// boxing one copy into the gateway.
#[derive(Default, Clone)]
pub struct InMemoryTransport {
    responses: Arc<RwLock<VecDeque<String>>>,
    sent: Arc<RwLock<Vec<OutboundMessage>>>,
}

impl InMemoryTransport {
    /// Creates a transport with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that will answer the next call with `body`.
    pub fn with_response(body: impl Into<String>) -> Self {
        Self {
            responses: Arc::new(RwLock::new(VecDeque::from([body.into()]))),
            ..Self::default()
        }
    }

    pub async fn push_response(&self, body: impl Into<String>) {
        self.responses.write().await.push_back(body.into());
    }

    /// Number of messages that reached the transport.
    pub async fn call_count(&self) -> usize {
        self.sent.read().await.len()
    }

    pub async fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl GatewayTransport for InMemoryTransport {
    async fn send(&self, message: OutboundMessage) -> Result<String> {
        self.sent.write().await.push(message);
        self.responses.write().await.pop_front().ok_or_else(|| {
            PaymentError::Transport(Box::new(std::io::Error::other(
                "no scripted response left",
            )))
        })
    }
}
