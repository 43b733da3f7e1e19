use crate::domain::method::PaymentMethod;
use crate::domain::ports::{PaymentSinkRef, PaymentStrategyRef, StrategyFactory};
use crate::domain::strategy::MethodPayment;
use crate::error::Result;
use std::sync::Arc;
use tracing::debug;

/// Looks up payment strategies by method.
///
/// Every strategy the registry builds reports to the sink the registry was
/// created with. The registry never substitutes a default: a key outside the
/// known set is an error.
#[derive(Clone)]
pub struct StrategyRegistry {
    sink: PaymentSinkRef,
}

impl StrategyRegistry {
    /// Creates a registry whose strategies report to `sink`.
    pub fn new(sink: PaymentSinkRef) -> Self {
        Self { sink }
    }

    /// Returns the constructor registered for `method`.
    pub fn factory(method: PaymentMethod) -> StrategyFactory {
        match method {
            PaymentMethod::CreditCard => credit_card_payment,
            PaymentMethod::DebitCard => debit_card_payment,
            PaymentMethod::PayPal => paypal_payment,
            PaymentMethod::BankTransfer => bank_transfer_payment,
            PaymentMethod::Cash => cash_payment,
        }
    }

    /// Builds the strategy for `method`.
    pub fn resolve(&self, method: PaymentMethod) -> PaymentStrategyRef {
        debug!(method = %method, "Resolving payment strategy");
        Self::factory(method)(self.sink.clone())
    }

    /// Builds the strategy for a textual key such as `"bank_transfer"`.
    ///
    /// Fails with `PaymentError::UnknownStrategyKey` if `key` is not a known method.
    pub fn resolve_key(&self, key: &str) -> Result<PaymentStrategyRef> {
        let method = key.parse::<PaymentMethod>()?;
        Ok(self.resolve(method))
    }

    /// The methods this registry can resolve.
    pub fn methods(&self) -> &'static [PaymentMethod] {
        &PaymentMethod::ALL
    }
}

fn credit_card_payment(sink: PaymentSinkRef) -> PaymentStrategyRef {
    Arc::new(MethodPayment::new(PaymentMethod::CreditCard, sink))
}

fn debit_card_payment(sink: PaymentSinkRef) -> PaymentStrategyRef {
    Arc::new(MethodPayment::new(PaymentMethod::DebitCard, sink))
}

fn paypal_payment(sink: PaymentSinkRef) -> PaymentStrategyRef {
    Arc::new(MethodPayment::new(PaymentMethod::PayPal, sink))
}

fn bank_transfer_payment(sink: PaymentSinkRef) -> PaymentStrategyRef {
    Arc::new(MethodPayment::new(PaymentMethod::BankTransfer, sink))
}

fn cash_payment(sink: PaymentSinkRef) -> PaymentStrategyRef {
    Arc::new(MethodPayment::new(PaymentMethod::Cash, sink))
}
