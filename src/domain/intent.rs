use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

/// A positive amount expressed in minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount(i64);

impl Amount {
    pub fn new(minor_units: i64) -> Result<Self, PaymentError> {
        if minor_units > 0 {
            Ok(Self(minor_units))
        } else {
            Err(PaymentError::Validation(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    /// The amount in major units, always carrying two decimal places.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl TryFrom<i64> for Amount {
    type Error = PaymentError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.to_decimal()
    }
}

/// What the caller wants to charge and where the customer comes back to.
///
/// Built once through [`PaymentIntentBuilder`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntent {
    amount: Amount,
    currency: Option<String>,
    return_url: String,
    cancel_url: Option<String>,
    transaction_id: Option<String>,
    description: Option<String>,
    card_reference: Option<String>,
    save_card: bool,
}

impl PaymentIntent {
    pub fn builder(amount: i64, return_url: impl Into<String>) -> PaymentIntentBuilder {
        PaymentIntentBuilder {
            amount,
            return_url: return_url.into(),
            currency: None,
            cancel_url: None,
            transaction_id: None,
            description: None,
            card_reference: None,
            save_card: false,
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// The return URL exactly as the caller supplied it.
    pub fn return_url(&self) -> &str {
        &self.return_url
    }

    /// Where the customer lands after a failed payment. Falls back to the return URL.
    pub fn cancel_url(&self) -> &str {
        self.cancel_url.as_deref().unwrap_or(&self.return_url)
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn card_reference(&self) -> Option<&str> {
        self.card_reference.as_deref()
    }

    pub fn save_card(&self) -> bool {
        self.save_card
    }
}

#[derive(Debug, Clone)]
pub struct PaymentIntentBuilder {
    amount: i64,
    return_url: String,
    currency: Option<String>,
    cancel_url: Option<String>,
    transaction_id: Option<String>,
    description: Option<String>,
    card_reference: Option<String>,
    save_card: bool,
}

impl PaymentIntentBuilder {
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn cancel_url(mut self, cancel_url: impl Into<String>) -> Self {
        self.cancel_url = Some(cancel_url.into());
        self
    }

    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn card_reference(mut self, card_reference: impl Into<String>) -> Self {
        self.card_reference = Some(card_reference.into());
        self
    }

    pub fn save_card(mut self, save_card: bool) -> Self {
        self.save_card = save_card;
        self
    }

    pub fn build(self) -> Result<PaymentIntent, PaymentError> {
        let amount = Amount::new(self.amount)?;
        ensure_absolute_url("return URL", &self.return_url)?;
        if let Some(cancel_url) = &self.cancel_url {
            ensure_absolute_url("cancel URL", cancel_url)?;
        }

        Ok(PaymentIntent {
            amount,
            currency: self.currency.map(|c| c.trim().to_uppercase()),
            return_url: self.return_url,
            cancel_url: self.cancel_url,
            transaction_id: self.transaction_id,
            description: self.description,
            card_reference: self.card_reference,
            save_card: self.save_card,
        })
    }
}

// Only checks the URL; the gateway receives the caller's text unchanged.
fn ensure_absolute_url(field: &str, raw: &str) -> Result<(), PaymentError> {
    Url::parse(raw)
        .map(|_| ())
        .map_err(|e| PaymentError::Validation(format!("Invalid {field} '{raw}': {e}")))
}
