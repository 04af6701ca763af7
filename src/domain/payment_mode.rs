use crate::error::GatewayError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of payment instrument a payment is made with.
///
/// Serialized upper case; parsed case-insensitively from any text source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum PaymentMode {
    Upi,
    Card,
    Netbanking,
}

impl PaymentMode {
    pub const ALL: [PaymentMode; 3] = [PaymentMode::Upi, PaymentMode::Card, PaymentMode::Netbanking];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Upi => "UPI",
            PaymentMode::Card => "CARD",
            PaymentMode::Netbanking => "NETBANKING",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMode {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GatewayError::ValidationError(format!("Unknown payment mode '{s}'")))
    }
}

impl TryFrom<String> for PaymentMode {
    type Error = GatewayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
