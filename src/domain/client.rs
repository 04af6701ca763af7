use super::payment_mode::PaymentMode;
use std::collections::BTreeSet;

/// A merchant registered with the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: u32,
    pub name: String,
    supported_modes: BTreeSet<PaymentMode>,
}

impl Client {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            supported_modes: BTreeSet::new(),
        }
    }

    pub fn with_modes(mut self, modes: impl IntoIterator<Item = PaymentMode>) -> Self {
        self.supported_modes.extend(modes);
        self
    }

    pub fn supported_modes(&self) -> &BTreeSet<PaymentMode> {
        &self.supported_modes
    }

    pub fn supports(&self, mode: PaymentMode) -> bool {
        self.supported_modes.contains(&mode)
    }

    pub fn add_mode(&mut self, mode: PaymentMode) {
        self.supported_modes.insert(mode);
    }

    pub fn remove_mode(&mut self, mode: PaymentMode) {
        self.supported_modes.remove(&mode);
    }
}
