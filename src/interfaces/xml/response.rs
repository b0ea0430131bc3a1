use crate::domain::result::{PaymentResult, RedirectMethod};
use crate::error::{PaymentError, Result};
use serde::Deserialize;

/// Reply to a `GenerateRequest`. On success `URI` is the hosted page; on
/// failure PxPay reuses it for the reason text.
#[derive(Debug, Deserialize)]
struct GenerateRequestReply {
    #[serde(rename = "@valid", default)]
    valid: String,
    #[serde(rename = "URI", default)]
    uri: Option<String>,
    #[serde(rename = "ResponseText", default)]
    response_text: Option<String>,
}

/// Reply to a `ProcessResponse`. Only the fields the result needs are read.
#[derive(Debug, Deserialize)]
struct ProcessResponseReply {
    #[serde(rename = "Success", default)]
    success: Option<String>,
    #[serde(rename = "DpsTxnRef", default)]
    dps_txn_ref: Option<String>,
    #[serde(rename = "HelpText", default)]
    help_text: Option<String>,
    #[serde(rename = "ResponseText", default)]
    response_text: Option<String>,
    #[serde(rename = "URI", default)]
    uri: Option<String>,
}

fn is_flag_set(value: &str) -> bool {
    value.trim() == "1"
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn first_present(candidates: [Option<String>; 3]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

/// Parses the answer to an authorize or purchase request.
///
/// Pure: the same body always yields the same result.
pub fn parse_generate_response(body: &str) -> Result<PaymentResult> {
    let reply: GenerateRequestReply = quick_xml::de::from_str(body)?;

    if is_flag_set(&reply.valid) {
        let uri = non_blank(reply.uri).ok_or_else(|| {
            PaymentError::MalformedResponse("hosted page reply has no URI".to_string())
        })?;
        Ok(PaymentResult::redirect(uri, RedirectMethod::Get))
    } else {
        Ok(PaymentResult::declined(first_present([
            reply.uri,
            reply.response_text,
            None,
        ])))
    }
}

/// Parses the final outcome returned after the customer left the hosted page.
pub fn parse_completion_response(body: &str) -> Result<PaymentResult> {
    let reply: ProcessResponseReply = quick_xml::de::from_str(body)?;
    let approved = reply.success.as_deref().is_some_and(is_flag_set);
    let message = first_present([reply.help_text, reply.response_text, reply.uri]);

    // Approval requires a non-blank reference.
    match non_blank(reply.dps_txn_ref) {
        Some(reference) if approved => Ok(PaymentResult::approved(reference, message)),
        _ => Ok(PaymentResult::declined(message)),
    }
}
