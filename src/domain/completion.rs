use crate::error::PaymentError;
use std::collections::HashMap;

/// Query parameter PxPay appends to the return URL.
pub const RESULT_PARAM: &str = "result";

/// Query parameters received when the customer comes back from the hosted page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnParams {
    params: HashMap<String, String>,
}

impl ReturnParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw, percent-encoded query string such as `result=abc123&userid=Dev`.
    ///
    /// A leading `?` is ignored. When a key repeats, the last value wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Extracts the token needed to finish a redirect flow.
    pub fn completion_token(&self) -> Result<CompletionToken, PaymentError> {
        CompletionToken::new(self.get(RESULT_PARAM).unwrap_or_default())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReturnParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Opaque token handed back by the gateway on the return leg. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct CompletionToken(String);

impl CompletionToken {
    pub fn new(token: impl Into<String>) -> Result<Self, PaymentError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(PaymentError::InvalidResponse(format!(
                "missing '{RESULT_PARAM}' parameter on return request"
            )));
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens are bearer data for the transaction; keep them out of logs.
impl std::fmt::Debug for CompletionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CompletionToken(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_pairs() {
        let params: ReturnParams = [("result", "abc123")].into_iter().collect();
        let token = params.completion_token().unwrap();
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn test_token_from_query_string_is_decoded() {
        let params = ReturnParams::from_query("?userid=Developer&result=v5H7%2BJr_B");
        assert_eq!(params.get("userid"), Some("Developer"));
        assert_eq!(params.completion_token().unwrap().as_str(), "v5H7+Jr_B");
    }

    #[test]
    fn test_missing_token_is_invalid_response() {
        let result = ReturnParams::new().completion_token();
        assert!(matches!(result, Err(PaymentError::InvalidResponse(_))));
    }

    #[test]
    fn test_empty_token_is_invalid_response() {
        let params = ReturnParams::from_query("result=");
        assert!(matches!(
            params.completion_token(),
            Err(PaymentError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = CompletionToken::new("secret-token").unwrap();
        assert!(!format!("{token:?}").contains("secret-token"));
    }
}
