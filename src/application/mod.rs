//! Application layer: strategy lookup and the contexts payments go through.
//!
//! `StrategyRegistry` turns a payment method into a strategy, `PaymentContext`
//! holds the current one, and `PaymentProcessor` wires the two together for a
//! stream of instructions. `SharedPaymentContext` guards a context with a
//! `tokio` lock for concurrent callers.

pub mod context;
pub mod processor;
pub mod registry;
pub mod shared;
