use crate::domain::ports::PaymentSink;
use crate::domain::receipt::Receipt;
use std::io::{self, Write};
use tracing::warn;

/// Prints one `Paid <amount> with <method>` line per receipt to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentSink for StdoutSink {
    fn record(&self, receipt: Receipt) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = writeln!(out, "{receipt}") {
            warn!(error = %e, method = %receipt.method, amount = receipt.amount, "Failed to print receipt");
        }
    }
}
