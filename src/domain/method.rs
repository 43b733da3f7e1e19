use crate::error::PaymentError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The closed set of payment methods a strategy can be selected by.
///
/// The textual key of each variant is its snake_case name (`credit_card`,
/// `paypal`, ...). Parsing anything else fails with
/// [`PaymentError::UnknownStrategyKey`]. The serialized form is the same key,
/// which is what receipts written as CSV carry in their `method` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    #[serde(rename = "paypal")]
    PayPal,
    BankTransfer,
    Cash,
}

impl PaymentMethod {
    /// Every supported method, in declaration order.
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::PayPal,
        PaymentMethod::BankTransfer,
        PaymentMethod::Cash,
    ];

    /// The key this method is selected by.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::DebitCard => "debit_card",
            PaymentMethod::PayPal => "paypal",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Cash => "cash",
        }
    }

    /// Human readable name used when reporting a payment.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit card",
            PaymentMethod::DebitCard => "debit card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::BankTransfer => "bank transfer",
            PaymentMethod::Cash => "cash",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == key)
            .ok_or_else(|| PaymentError::UnknownStrategyKey(key.to_string()))
    }
}
