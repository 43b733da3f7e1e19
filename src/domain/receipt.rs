use super::method::PaymentMethod;
use serde::Serialize;
use std::fmt;

/// The observable effect of executing a payment strategy once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub method: PaymentMethod,
    pub amount: i64,
}

impl Receipt {
    pub fn new(method: PaymentMethod, amount: i64) -> Self {
        Self { method, amount }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paid {} with {}", self.amount, self.method.label())
    }
}
