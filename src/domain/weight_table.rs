use super::payment_mode::PaymentMode;
use crate::error::{GatewayError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// One destination bank and its share of a mode's traffic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedBank {
    pub bank: String,
    pub weight: u32,
}

impl WeightedBank {
    pub fn new(bank: impl Into<String>, weight: u32) -> Self {
        Self {
            bank: bank.into(),
            weight,
        }
    }
}

/// Per-mode routing configuration.
///
/// Entries keep their insertion order, which decides ties during weighted
/// selection. Weights are only relative: the sum per mode is the sampling
/// range and does not have to be 100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeightTable {
    routes: BTreeMap<PaymentMode, Vec<WeightedBank>>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bank to the end of `mode`'s list.
    pub fn insert(&mut self, mode: PaymentMode, bank: impl Into<String>, weight: u32) -> Result<()> {
        let bank = bank.into();
        if bank.trim().is_empty() {
            return Err(GatewayError::ConfigurationError(format!(
                "Empty bank identifier for payment mode {mode}"
            )));
        }
        self.routes
            .entry(mode)
            .or_default()
            .push(WeightedBank::new(bank, weight));
        Ok(())
    }

    /// Builder form of [`WeightTable::insert`].
    pub fn with_route(mut self, mode: PaymentMode, bank: impl Into<String>, weight: u32) -> Result<Self> {
        self.insert(mode, bank, weight)?;
        Ok(self)
    }

    /// Configured entries for `mode`, or `None` when the mode has none.
    pub fn entries(&self, mode: PaymentMode) -> Option<&[WeightedBank]> {
        self.routes
            .get(&mode)
            .map(Vec::as_slice)
            .filter(|entries| !entries.is_empty())
    }

    pub fn total_weight(&self, mode: PaymentMode) -> u64 {
        self.entries(mode).map(total_weight).unwrap_or(0)
    }

    pub fn modes(&self) -> impl Iterator<Item = PaymentMode> + '_ {
        self.routes
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(mode, _)| *mode)
    }

    /// Every distinct bank identifier with the modes it is routed for.
    pub fn banks(&self) -> BTreeMap<&str, Vec<PaymentMode>> {
        let mut banks: BTreeMap<&str, Vec<PaymentMode>> = BTreeMap::new();
        for (mode, entries) in &self.routes {
            for entry in entries {
                let modes = banks.entry(entry.bank.as_str()).or_default();
                if !modes.contains(mode) {
                    modes.push(*mode);
                }
            }
        }
        banks
    }

    pub fn is_empty(&self) -> bool {
        self.modes().next().is_none()
    }
}

/// Sum of weights, widened so that large tables cannot overflow.
pub fn total_weight(entries: &[WeightedBank]) -> u64 {
    entries.iter().map(|entry| u64::from(entry.weight)).sum()
}
