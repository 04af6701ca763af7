use crate::error::GatewayError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A strictly positive payment amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, GatewayError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(GatewayError::ValidationError(format!(
                "Amount must be positive, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = GatewayError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rejects_zero_and_negative() {
        assert!(Amount::new(Decimal::ZERO).is_err());
        assert!(Amount::new(dec!(-1.5)).is_err());
        assert_eq!(Amount::new(dec!(0.0001)).unwrap().value(), dec!(0.0001));
    }

    #[test]
    fn test_display_is_normalized() {
        let amount = Amount::new(dec!(1000.00)).unwrap();
        assert_eq!(amount.to_string(), "1000");
    }
}
