use std::fmt;

/// Live PxPay endpoint. Both the generate and the process requests are posted here.
pub const DEFAULT_ENDPOINT: &str = "https://sec.paymentexpress.com/pxpay/pxaccess.aspx";

/// Merchant credentials and the endpoint the gateway talks to.
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub user_id: String,
    pub key: String,
    pub endpoint: String,
}

impl GatewayConfig {
    pub fn new(user_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            key: key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("user_id", &self.user_id)
            .field("key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = GatewayConfig::new("Developer", "secret");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

        let config = config.with_endpoint("http://localhost:8080/pxaccess.aspx");
        assert_eq!(config.endpoint, "http://localhost:8080/pxaccess.aspx");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GatewayConfig::new("Developer", "secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("Developer"));
        assert!(!debug.contains("secret"));
    }
}
