use super::amount::Amount;
use super::payment_mode::PaymentMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome reported by a bank. A decline is a business result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Success,
    Failed,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Success => f.write_str("SUCCESS"),
            PaymentStatus::Failed => f.write_str("FAILED"),
        }
    }
}

/// A payment submitted to the gateway. `client` is optional: anonymous
/// payments skip the client checks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentRequest {
    pub client: Option<u32>,
    pub mode: PaymentMode,
    pub amount: Amount,
}

/// What happened to one payment.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub client: Option<u32>,
    pub mode: PaymentMode,
    pub amount: Amount,
    pub bank: String,
    pub status: PaymentStatus,
}
