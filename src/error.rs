use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Unknown payment strategy key: {0}")]
    UnknownStrategyKey(String),
    #[error("Payment input is missing the `{0}` column")]
    MissingColumn(&'static str),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
