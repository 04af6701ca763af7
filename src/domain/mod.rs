//! Domain types and the ports the gateway talks through.

pub mod amount;
pub mod client;
pub mod payment;
pub mod payment_mode;
pub mod ports;
pub mod weight_table;
