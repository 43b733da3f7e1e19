use serde::Deserialize;

/// A request to pay `amount` with the strategy selected by `method`.
///
/// `method` stays a raw key so an unknown value reaches the registry and is
/// reported as an unknown strategy rather than a parse failure.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct PaymentInstruction {
    pub method: String,
    pub amount: i64,
}

impl PaymentInstruction {
    pub fn new(method: impl Into<String>, amount: i64) -> Self {
        Self {
            method: method.into(),
            amount,
        }
    }
}
