use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum RedirectMethod {
    Get,
    Post,
}

impl fmt::Display for RedirectMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedirectMethod::Get => f.write_str("GET"),
            RedirectMethod::Post => f.write_str("POST"),
        }
    }
}

/// Where a transaction sits once the gateway has answered.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransactionState {
    /// The customer has to finish on the hosted page.
    Redirecting,
    Approved,
    Declined,
}

impl TransactionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransactionState::Redirecting)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
enum Outcome {
    Approved { reference: String, message: String },
    Redirect { url: String, method: RedirectMethod },
    Declined { message: String },
}

/// The gateway-neutral answer to an authorize, purchase or completion call.
///
/// Exactly one of approved, redirect or declined holds at any time, so a result
/// can never be both successful and waiting on a redirect.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PaymentResult {
    outcome: Outcome,
}

impl PaymentResult {
    pub fn approved(reference: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Approved {
                reference: reference.into(),
                message: message.into(),
            },
        }
    }

    pub fn redirect(url: impl Into<String>, method: RedirectMethod) -> Self {
        Self {
            outcome: Outcome::Redirect {
                url: url.into(),
                method,
            },
        }
    }

    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Declined {
                message: message.into(),
            },
        }
    }

    pub fn is_successful(&self) -> bool {
        matches!(self.outcome, Outcome::Approved { .. })
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.outcome, Outcome::Redirect { .. })
    }

    pub fn redirect_url(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Redirect { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn redirect_method(&self) -> Option<RedirectMethod> {
        match &self.outcome {
            Outcome::Redirect { method, .. } => Some(*method),
            _ => None,
        }
    }

    /// The gateway's transaction id. Only present on approval.
    pub fn gateway_reference(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Approved { reference, .. } => Some(reference),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Approved { message, .. } | Outcome::Declined { message } => Some(message),
            Outcome::Redirect { .. } => None,
        }
    }

    pub fn state(&self) -> TransactionState {
        match self.outcome {
            Outcome::Approved { .. } => TransactionState::Approved,
            Outcome::Redirect { .. } => TransactionState::Redirecting,
            Outcome::Declined { .. } => TransactionState::Declined,
        }
    }
}

#[derive(Serialize)]
struct FlatResult<'a> {
    successful: bool,
    requires_redirect: bool,
    redirect_url: Option<&'a str>,
    redirect_method: Option<RedirectMethod>,
    gateway_reference: Option<&'a str>,
    message: Option<&'a str>,
}

impl Serialize for PaymentResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        FlatResult {
            successful: self.is_successful(),
            requires_redirect: self.is_redirect(),
            redirect_url: self.redirect_url(),
            redirect_method: self.redirect_method(),
            gateway_reference: self.gateway_reference(),
            message: self.message(),
        }
        .serialize(serializer)
    }
}
