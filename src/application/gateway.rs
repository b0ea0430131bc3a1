use crate::config::GatewayConfig;
use crate::domain::completion::ReturnParams;
use crate::domain::intent::PaymentIntent;
use crate::domain::operation::OperationKind;
use crate::domain::ports::{GatewayTransportBox, OutboundMessage};
use crate::domain::result::PaymentResult;
use crate::error::Result;
use crate::interfaces::xml;
use tracing::{debug, info};

/// The entry point for PxPay hosted-page payments.
///
/// `PxPayGateway` builds the PxPay XML for each call, hands it to the
/// transport, and maps the reply onto a [`PaymentResult`]. It keeps no state
/// between calls; the gateway itself correlates the completion token with the
/// original request.
pub struct PxPayGateway {
    config: GatewayConfig,
    transport: GatewayTransportBox,
}

impl PxPayGateway {
    /// Creates a new `PxPayGateway`.
    ///
    /// # Arguments
    ///
    /// * `config` - Merchant credentials and endpoint.
    /// * `transport` - Moves encoded requests to the gateway.
    pub fn new(config: GatewayConfig, transport: GatewayTransportBox) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Requests a hosted page for an authorization.
    pub async fn authorize(&self, intent: &PaymentIntent) -> Result<PaymentResult> {
        self.begin(OperationKind::Authorize, intent).await
    }

    /// Requests a hosted page for a purchase.
    pub async fn purchase(&self, intent: &PaymentIntent) -> Result<PaymentResult> {
        self.begin(OperationKind::Purchase, intent).await
    }

    /// Resolves an authorization once the customer is back from the hosted page.
    ///
    /// Fails with `PaymentError::InvalidResponse`, without contacting the
    /// gateway, when `params` has no `result` token.
    pub async fn complete_authorize(&self, params: &ReturnParams) -> Result<PaymentResult> {
        self.complete(OperationKind::Authorize, params).await
    }

    /// Resolves a purchase once the customer is back from the hosted page.
    pub async fn complete_purchase(&self, params: &ReturnParams) -> Result<PaymentResult> {
        self.complete(OperationKind::Purchase, params).await
    }

    /// `kind` selects the `TxnType` element and nothing else.
    #[tracing::instrument(skip(self, intent), fields(amount = intent.amount().minor_units()))]
    async fn begin(&self, kind: OperationKind, intent: &PaymentIntent) -> Result<PaymentResult> {
        let body = xml::encode_generate_request(&self.config, kind, intent)?;
        let reply = self.send(body).await?;
        let result = xml::parse_generate_response(&reply)?;

        info!(
            redirect = result.is_redirect(),
            state = ?result.state(),
            "hosted page requested"
        );
        Ok(result)
    }

    /// Both completion entry points land here. `kind` only labels the span;
    /// the wire format is the same for either.
    #[tracing::instrument(skip(self, params))]
    async fn complete(&self, kind: OperationKind, params: &ReturnParams) -> Result<PaymentResult> {
        let token = params.completion_token()?;

        let body = xml::encode_process_response(&self.config, &token)?;
        let reply = self.send(body).await?;
        let result = xml::parse_completion_response(&reply)?;

        info!(
            successful = result.is_successful(),
            reference = result.gateway_reference(),
            "transaction completed"
        );
        Ok(result)
    }

    async fn send(&self, body: String) -> Result<String> {
        debug!(endpoint = %self.config.endpoint, "sending request");
        self.transport
            .send(OutboundMessage {
                endpoint: self.config.endpoint.clone(),
                body,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result::{RedirectMethod, TransactionState};
    use crate::error::PaymentError;
    use crate::infrastructure::in_memory::InMemoryTransport;

    const PURCHASE_SUCCESS: &str =
        include_str!("../../tests/fixtures/PxPayPurchaseSuccess.xml");
    const COMPLETE_SUCCESS: &str =
        include_str!("../../tests/fixtures/PxPayCompletePurchaseSuccess.xml");

    fn gateway(transport: &InMemoryTransport) -> PxPayGateway {
        PxPayGateway::new(
            GatewayConfig::new("Developer", "k3y"),
            Box::new(transport.clone()),
        )
    }

    fn intent() -> PaymentIntent {
        PaymentIntent::builder(1000, "https://www.example.com/return")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_authorize_sends_auth_txn_type() {
        let transport = InMemoryTransport::with_response(PURCHASE_SUCCESS);
        let result = gateway(&transport).authorize(&intent()).await.unwrap();

        assert_eq!(result.redirect_method(), Some(RedirectMethod::Get));

        let sent = transport.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].endpoint, crate::config::DEFAULT_ENDPOINT);
        assert!(sent[0].body.contains("<TxnType>Auth</TxnType>"));
        assert!(sent[0].body.contains("<AmountInput>10.00</AmountInput>"));
    }

    #[tokio::test]
    async fn test_purchase_sends_purchase_txn_type() {
        let transport = InMemoryTransport::with_response(PURCHASE_SUCCESS);
        gateway(&transport).purchase(&intent()).await.unwrap();

        let sent = transport.sent().await;
        assert!(sent[0].body.contains("<TxnType>Purchase</TxnType>"));
    }

    #[tokio::test]
    async fn test_complete_sends_token() {
        let transport = InMemoryTransport::with_response(COMPLETE_SUCCESS);
        let params = ReturnParams::from_query("result=abc123");

        let result = gateway(&transport)
            .complete_purchase(&params)
            .await
            .unwrap();

        assert_eq!(result.state(), TransactionState::Approved);
        let sent = transport.sent().await;
        assert!(sent[0].body.contains("<Response>abc123</Response>"));
        assert!(sent[0].body.starts_with("<ProcessResponse>"));
    }

    #[tokio::test]
    async fn test_complete_without_token_skips_transport() {
        let transport = InMemoryTransport::with_response(COMPLETE_SUCCESS);

        let result = gateway(&transport)
            .complete_authorize(&ReturnParams::new())
            .await;

        assert!(matches!(result, Err(PaymentError::InvalidResponse(_))));
        assert_eq!(transport.call_count().await, 0);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let transport = InMemoryTransport::new();

        let result = gateway(&transport).purchase(&intent()).await;
        assert!(matches!(result, Err(PaymentError::Transport(_))));
    }

    #[tokio::test]
    async fn test_malformed_reply_is_not_retried() {
        let transport = InMemoryTransport::with_response("<Request valid=");

        let result = gateway(&transport).authorize(&intent()).await;
        assert!(matches!(result, Err(PaymentError::Decode(_))));
        assert_eq!(transport.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_redirect_without_uri_is_an_error() {
        let transport = InMemoryTransport::with_response(r#"<Request valid="1"><URI/></Request>"#);

        let result = gateway(&transport).purchase(&intent()).await;
        assert!(matches!(result, Err(PaymentError::MalformedResponse(_))));
    }
}
