use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// The return leg did not carry the data needed to complete a transaction.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Gateway returned HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    /// The gateway reply parsed but lacks a field its outcome depends on.
    #[error("Malformed gateway response: {0}")]
    MalformedResponse(String),
    #[error("XML decode error: {0}")]
    Decode(#[from] quick_xml::de::DeError),
    #[error("XML encode error: {0}")]
    Encode(#[from] quick_xml::se::SeError),
}

impl From<reqwest::Error> for PaymentError {
    fn from(err: reqwest::Error) -> Self {
        PaymentError::Transport(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
