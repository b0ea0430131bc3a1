use serde::Serialize;
use std::fmt;

/// Which entry point started a flow.
///
/// Authorize and purchase share one wire format; the kind only changes the
/// transaction type the gateway records.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Authorize,
    Purchase,
}

impl OperationKind {
    /// Value of the PxPay `TxnType` element.
    pub fn txn_type(&self) -> &'static str {
        match self {
            OperationKind::Authorize => "Auth",
            OperationKind::Purchase => "Purchase",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Authorize => f.write_str("authorize"),
            OperationKind::Purchase => f.write_str("purchase"),
        }
    }
}
