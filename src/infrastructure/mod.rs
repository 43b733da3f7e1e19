//! Sink adapters that make executed payments observable.

pub mod in_memory;
pub mod stdout;
