use super::method::PaymentMethod;
use super::receipt::Receipt;
use std::sync::Arc;

/// Receives the effect of every executed payment.
pub trait PaymentSink: Send + Sync {
    fn record(&self, receipt: Receipt);
}

/// An interchangeable "pay an amount" behavior.
pub trait PaymentStrategy: Send + Sync {
    fn execute(&self, amount: i64);

    /// The payment method this strategy implements, if it is one of the built-ins.
    fn method(&self) -> Option<PaymentMethod> {
        None
    }
}

pub type PaymentSinkRef = Arc<dyn PaymentSink>;
pub type PaymentStrategyRef = Arc<dyn PaymentStrategy>;
pub type StrategyFactory = fn(PaymentSinkRef) -> PaymentStrategyRef;
