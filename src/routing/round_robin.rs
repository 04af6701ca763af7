use super::RoutingStrategy;
use crate::domain::payment_mode::PaymentMode;
use crate::domain::weight_table::{WeightTable, WeightedBank};
use crate::error::{GatewayError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Cycles through a mode's banks in configured order, ignoring weights
/// except that a zero weight takes a bank out of rotation.
pub struct RoundRobinStrategy {
    table: WeightTable,
    counters: HashMap<PaymentMode, AtomicUsize>,
}

impl RoundRobinStrategy {
    pub fn new(table: WeightTable) -> Self {
        let counters = table
            .modes()
            .map(|mode| (mode, AtomicUsize::new(0)))
            .collect();
        Self { table, counters }
    }
}

impl RoutingStrategy for RoundRobinStrategy {
    fn name(&self) -> &'static str {
        "round_robin"
    }

    fn route(&self, mode: PaymentMode) -> Result<String> {
        let candidates: Vec<&WeightedBank> = self
            .table
            .entries(mode)
            .unwrap_or_default()
            .iter()
            .filter(|entry| entry.weight > 0)
            .collect();

        let counter = match self.counters.get(&mode) {
            Some(counter) if !candidates.is_empty() => counter,
            _ => {
                return Err(GatewayError::ConfigurationError(format!(
                    "No routable banks configured for payment mode {mode}"
                )));
            }
        };

        let idx = counter.fetch_add(1, Ordering::Relaxed) % candidates.len();
        let selected = candidates[idx];
        debug!(%mode, index = idx, total = candidates.len(), bank = %selected.bank, "round robin route selected");
        Ok(selected.bank.clone())
    }

    fn distribution(&self) -> &WeightTable {
        &self.table
    }
}
