use super::RoutingStrategy;
use super::draws::{DrawSource, RngDraws};
use crate::domain::payment_mode::PaymentMode;
use crate::domain::weight_table::{WeightTable, WeightedBank, total_weight};
use crate::error::{GatewayError, Result};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Walks `entries` in order and returns the first one whose cumulative
/// weight exceeds `draw`.
///
/// Returns `None` only when `draw` is not below the total weight.
pub fn select(entries: &[WeightedBank], draw: u64) -> Option<&WeightedBank> {
    let mut cumulative = 0u64;
    entries.iter().find(|entry| {
        cumulative += u64::from(entry.weight);
        draw < cumulative
    })
}

/// Routes each payment to a bank with probability proportional to its weight.
pub struct WeightedStrategy<D: DrawSource = RngDraws> {
    table: WeightTable,
    draws: Mutex<D>,
}

impl WeightedStrategy<RngDraws> {
    pub fn new(table: WeightTable) -> Self {
        Self::with_draws(table, RngDraws::from_entropy())
    }
}

impl<D: DrawSource> WeightedStrategy<D> {
    pub fn with_draws(table: WeightTable, draws: D) -> Self {
        Self {
            table,
            draws: Mutex::new(draws),
        }
    }
}

impl<D: DrawSource> RoutingStrategy for WeightedStrategy<D> {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn route(&self, mode: PaymentMode) -> Result<String> {
        let entries = self.table.entries(mode).ok_or_else(|| {
            GatewayError::ConfigurationError(format!("No routes configured for payment mode {mode}"))
        })?;

        let total = total_weight(entries);
        if total == 0 {
            return Err(GatewayError::ConfigurationError(format!(
                "Routes for payment mode {mode} have zero total weight"
            )));
        }

        let draw = self
            .draws
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .draw_below(total);

        let selected = select(entries, draw).ok_or_else(|| {
            GatewayError::ConfigurationError(format!(
                "Draw {draw} fell outside total weight {total} for payment mode {mode}"
            ))
        })?;

        debug!(%mode, draw, total, bank = %selected.bank, "weighted route selected");
        Ok(selected.bank.clone())
    }

    fn distribution(&self) -> &WeightTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::draws::FixedDraws;
    use std::collections::HashMap;

    fn upi_table() -> WeightTable {
        WeightTable::new()
            .with_route(PaymentMode::Upi, "HDFC", 70)
            .unwrap()
            .with_route(PaymentMode::Upi, "ICICI", 30)
            .unwrap()
    }

    #[test]
    fn test_cumulative_boundaries() {
        let strategy = WeightedStrategy::with_draws(upi_table(), FixedDraws::new([0, 69, 70, 99]));

        let picks: Vec<String> = (0..4)
            .map(|_| strategy.route(PaymentMode::Upi).unwrap())
            .collect();

        assert_eq!(picks, vec!["HDFC", "HDFC", "ICICI", "ICICI"]);
    }

    #[test]
    fn test_single_entry_always_selected() {
        let table = WeightTable::new()
            .with_route(PaymentMode::Card, "HDFC", 100)
            .unwrap();
        let strategy = WeightedStrategy::with_draws(table, FixedDraws::new(0..100));

        for _ in 0..100 {
            assert_eq!(strategy.route(PaymentMode::Card).unwrap(), "HDFC");
        }
    }

    #[test]
    fn test_unconfigured_mode_is_configuration_error() {
        let strategy = WeightedStrategy::with_draws(upi_table(), FixedDraws::new([0]));
        let err = strategy.route(PaymentMode::Netbanking).unwrap_err();
        assert!(matches!(err, GatewayError::ConfigurationError(_)));
    }

    #[test]
    fn test_zero_total_weight_is_configuration_error() {
        let table = WeightTable::new()
            .with_route(PaymentMode::Card, "HDFC", 0)
            .unwrap();
        let strategy = WeightedStrategy::with_draws(table, FixedDraws::new([0]));
        let err = strategy.route(PaymentMode::Card).unwrap_err();
        assert!(matches!(err, GatewayError::ConfigurationError(_)));
    }

    #[test]
    fn test_every_draw_selects_exactly_one_configured_bank() {
        let entries = vec![
            WeightedBank::new("A", 3),
            WeightedBank::new("B", 0),
            WeightedBank::new("C", 5),
            WeightedBank::new("D", 2),
        ];
        let total = total_weight(&entries);

        for draw in 0..total {
            let selected = select(&entries, draw).unwrap();
            assert!(entries.contains(selected));
            assert_ne!(selected.bank, "B", "zero-weight entry must never win");
        }
        assert!(select(&entries, total).is_none());
    }

    #[test]
    fn test_ties_go_to_the_earlier_entry() {
        let entries = vec![WeightedBank::new("FIRST", 1), WeightedBank::new("SECOND", 1)];
        assert_eq!(select(&entries, 0).unwrap().bank, "FIRST");
        assert_eq!(select(&entries, 1).unwrap().bank, "SECOND");
    }

    #[test]
    fn test_frequencies_converge_to_weight_share() {
        // Weights deliberately do not add up to 100
        let table = WeightTable::new()
            .with_route(PaymentMode::Upi, "HDFC", 5)
            .unwrap()
            .with_route(PaymentMode::Upi, "ICICI", 3)
            .unwrap()
            .with_route(PaymentMode::Upi, "AXIS", 2)
            .unwrap()
            .with_route(PaymentMode::Upi, "SBI", 10)
            .unwrap();
        let strategy = WeightedStrategy::with_draws(table, RngDraws::seeded(0x5eed));

        const TRIALS: usize = 100_000;
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..TRIALS {
            *counts.entry(strategy.route(PaymentMode::Upi).unwrap()).or_default() += 1;
        }

        for (bank, weight) in [("HDFC", 5.0), ("ICICI", 3.0), ("AXIS", 2.0), ("SBI", 10.0)] {
            let observed = counts[bank] as f64 / TRIALS as f64;
            let expected = weight / 20.0;
            assert!(
                (observed - expected).abs() < 0.02,
                "{bank}: observed {observed}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_strategy_is_shareable_across_threads() {
        let strategy = std::sync::Arc::new(WeightedStrategy::with_draws(upi_table(), RngDraws::seeded(1)));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let strategy = strategy.clone();
                std::thread::spawn(move || {
                    for _ in 0..1_000 {
                        let bank = strategy.route(PaymentMode::Upi).unwrap();
                        assert!(bank == "HDFC" || bank == "ICICI");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
