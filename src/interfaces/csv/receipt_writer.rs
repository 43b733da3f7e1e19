use crate::domain::receipt::Receipt;
use crate::error::Result;
use std::io::Write;

/// Writes receipts as CSV rows under a `method,amount` header.
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(output: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(output),
        }
    }

    /// Writes every receipt and flushes the underlying writer.
    pub fn write_receipts(&mut self, receipts: impl IntoIterator<Item = Receipt>) -> Result<()> {
        let mut wrote_any = false;
        for receipt in receipts {
            self.writer.serialize(receipt)?;
            wrote_any = true;
        }
        // serialize only emits the header alongside the first record
        if !wrote_any {
            self.writer.write_record(["method", "amount"])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
