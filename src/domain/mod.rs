//! Domain types: payment methods, strategies, receipts and the ports they plug into.

pub mod instruction;
pub mod method;
pub mod ports;
pub mod receipt;
pub mod strategy;
