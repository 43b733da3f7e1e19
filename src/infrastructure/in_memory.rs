use crate::domain::ports::PaymentSink;
use crate::domain::receipt::Receipt;
use std::sync::{Arc, Mutex, PoisonError};

/// A thread-safe in-memory sink for payment receipts.
///
/// Uses `Arc<Mutex<Vec<Receipt>>>` so clones share the same log, keeping
/// receipts in the order they were recorded.
/// Ideal for testing or for collecting receipts before writing them out.
#[derive(Default, Clone)]
pub struct InMemorySink {
    receipts: Arc<Mutex<Vec<Receipt>>>,
}

impl InMemorySink {
    /// Creates a new, empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every receipt recorded so far.
    pub fn receipts(&self) -> Vec<Receipt> {
        self.receipts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PaymentSink for InMemorySink {
    fn record(&self, receipt: Receipt) {
        self.receipts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(receipt);
    }
}
