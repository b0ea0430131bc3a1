use crate::config::GatewayConfig;
use crate::domain::completion::CompletionToken;
use crate::domain::intent::PaymentIntent;
use crate::domain::operation::OperationKind;
use crate::error::Result;
use serde::Serialize;

/// Body of the first round-trip, asking PxPay for a hosted payment page.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    #[serde(rename = "PxPayUserId")]
    user_id: &'a str,
    #[serde(rename = "PxPayKey")]
    key: &'a str,
    #[serde(rename = "TxnType")]
    txn_type: &'static str,
    #[serde(rename = "AmountInput")]
    amount_input: String,
    #[serde(rename = "CurrencyInput", skip_serializing_if = "Option::is_none")]
    currency_input: Option<&'a str>,
    #[serde(rename = "MerchantReference", skip_serializing_if = "Option::is_none")]
    merchant_reference: Option<&'a str>,
    #[serde(rename = "TxnId", skip_serializing_if = "Option::is_none")]
    txn_id: Option<&'a str>,
    #[serde(rename = "EnableAddBillCard", skip_serializing_if = "Option::is_none")]
    enable_add_bill_card: Option<u8>,
    #[serde(rename = "DpsBillingId", skip_serializing_if = "Option::is_none")]
    dps_billing_id: Option<&'a str>,
    #[serde(rename = "UrlSuccess")]
    url_success: &'a str,
    #[serde(rename = "UrlFail")]
    url_fail: &'a str,
}

/// Body of the second round-trip, trading the return-leg token for the outcome.
#[derive(Debug, Serialize)]
struct ProcessResponse<'a> {
    #[serde(rename = "PxPayUserId")]
    user_id: &'a str,
    #[serde(rename = "PxPayKey")]
    key: &'a str,
    #[serde(rename = "Response")]
    response: &'a str,
}

pub fn encode_generate_request(
    config: &GatewayConfig,
    kind: OperationKind,
    intent: &PaymentIntent,
) -> Result<String> {
    let request = GenerateRequest {
        user_id: &config.user_id,
        key: &config.key,
        txn_type: kind.txn_type(),
        amount_input: intent.amount().to_decimal().to_string(),
        currency_input: intent.currency(),
        merchant_reference: intent.description(),
        txn_id: intent.transaction_id(),
        enable_add_bill_card: intent.save_card().then_some(1),
        dps_billing_id: intent.card_reference(),
        url_success: intent.return_url(),
        url_fail: intent.cancel_url(),
    };

    Ok(quick_xml::se::to_string_with_root("GenerateRequest", &request)?)
}

pub fn encode_process_response(config: &GatewayConfig, token: &CompletionToken) -> Result<String> {
    let request = ProcessResponse {
        user_id: &config.user_id,
        key: &config.key,
        response: token.as_str(),
    };

    Ok(quick_xml::se::to_string_with_root("ProcessResponse", &request)?)
}
