//! Application layer orchestrating routing and bank processing.
//!
//! This module defines the `PaymentGateway`, which owns the client and bank
//! registries and delegates the choice of bank to a routing strategy.

pub mod gateway;
