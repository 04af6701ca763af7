use crate::domain::amount::Amount;
use crate::domain::payment::PaymentStatus;
use crate::domain::payment_mode::PaymentMode;
use crate::domain::ports::BankProcessor;
use crate::routing::draws::{DrawSource, RngDraws};
use async_trait::async_trait;
use std::collections::BTreeSet;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// A stand-in for a real bank: every payment is a coin flip.
///
/// A draw of `0` approves the payment, anything else declines it. Payments in
/// a mode the bank does not support are declined without drawing.
pub struct SimulatedBank<D: DrawSource = RngDraws> {
    name: String,
    supported_modes: BTreeSet<PaymentMode>,
    outcomes: Mutex<D>,
}

impl SimulatedBank<RngDraws> {
    pub fn with_entropy(name: impl Into<String>) -> Self {
        Self::new(name, RngDraws::from_entropy())
    }
}

impl<D: DrawSource> SimulatedBank<D> {
    pub fn new(name: impl Into<String>, outcomes: D) -> Self {
        Self {
            name: name.into(),
            supported_modes: BTreeSet::new(),
            outcomes: Mutex::new(outcomes),
        }
    }

    pub fn with_mode(mut self, mode: PaymentMode) -> Self {
        self.add_supported_mode(mode);
        self
    }

    pub fn add_supported_mode(&mut self, mode: PaymentMode) {
        self.supported_modes.insert(mode);
    }

    pub fn supports(&self, mode: PaymentMode) -> bool {
        self.supported_modes.contains(&mode)
    }
}

#[async_trait]
impl<D: DrawSource> BankProcessor for SimulatedBank<D> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn process_payment(&self, amount: Amount, mode: PaymentMode) -> PaymentStatus {
        if !self.supports(mode) {
            warn!(bank = %self.name, %mode, %amount, "declining payment in unsupported mode");
            return PaymentStatus::Failed;
        }

        let draw = self.outcomes.lock().await.draw_below(2);
        let status = if draw == 0 {
            PaymentStatus::Success
        } else {
            PaymentStatus::Failed
        };
        info!(bank = %self.name, %mode, %amount, %status, "payment processed");
        status
    }
}
