use crate::domain::instruction::PaymentInstruction;
use crate::error::{PaymentError, Result};
use std::io::Read;

const REQUIRED_COLUMNS: [&str; 2] = ["method", "amount"];

/// Parses `method, amount` rows into [`PaymentInstruction`]s.
///
/// The header row is mandatory and is checked before any payment is read;
/// column order and surrounding whitespace do not matter. The `method` cell is
/// handed on verbatim, so a key such as `bitcoin` still parses here and is
/// rejected later by the strategy registry as an unknown strategy.
pub struct InstructionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InstructionReader<R> {
    pub fn new(input: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input);
        Self { reader }
    }

    /// Validates the header, then yields one instruction per remaining row.
    ///
    /// Fails up front if the input cannot be read at all or lacks a `method`
    /// or `amount` column. A row that does not fit (say a fractional amount)
    /// comes back as a `CsvError` item and the rows after it are still read.
    pub fn instructions(mut self) -> Result<impl Iterator<Item = Result<PaymentInstruction>>> {
        let headers = self.reader.headers()?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(PaymentError::MissingColumn(column));
            }
        }

        Ok(self
            .reader
            .into_deserialize()
            .map(|row| row.map_err(PaymentError::from)))
    }
}
