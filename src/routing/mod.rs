//! Routing strategies: pick the bank that should process a payment.
//!
//! Callers depend only on [`RoutingStrategy`], so new strategies can be
//! added without touching the gateway.

pub mod draws;
pub mod round_robin;
pub mod weighted;

use crate::domain::payment_mode::PaymentMode;
use crate::domain::weight_table::WeightTable;
use crate::error::Result;

pub use draws::{DrawSource, FixedDraws, RngDraws};
pub use round_robin::RoundRobinStrategy;
pub use weighted::WeightedStrategy;

pub trait RoutingStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Selects the bank identifier for one payment in `mode`.
    ///
    /// Fails with `ConfigurationError` when nothing is routable for `mode`.
    fn route(&self, mode: PaymentMode) -> Result<String>;

    /// The table this strategy routes over.
    fn distribution(&self) -> &WeightTable;
}

pub type RoutingStrategyBox = Box<dyn RoutingStrategy>;
