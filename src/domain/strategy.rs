use super::method::PaymentMethod;
use super::ports::{PaymentSinkRef, PaymentStrategy};
use super::receipt::Receipt;

/// Built-in strategy for one of the known payment methods.
///
/// Executing it reports a [`Receipt`] for its method to the sink it was built with.
#[derive(Clone)]
pub struct MethodPayment {
    method: PaymentMethod,
    sink: PaymentSinkRef,
}

impl MethodPayment {
    pub fn new(method: PaymentMethod, sink: PaymentSinkRef) -> Self {
        Self { method, sink }
    }
}

impl PaymentStrategy for MethodPayment {
    fn execute(&self, amount: i64) {
        self.sink.record(Receipt::new(self.method, amount));
    }

    fn method(&self) -> Option<PaymentMethod> {
        Some(self.method)
    }
}

/// Adapts a plain function or closure into a [`PaymentStrategy`].
pub struct FnStrategy<F> {
    f: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(i64) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> PaymentStrategy for FnStrategy<F>
where
    F: Fn(i64) + Send + Sync,
{
    fn execute(&self, amount: i64) {
        (self.f)(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemorySink;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI64, Ordering};

    #[test]
    fn test_method_payment_records_receipt() {
        let sink = InMemorySink::new();
        let strategy = MethodPayment::new(PaymentMethod::DebitCard, Arc::new(sink.clone()));

        strategy.execute(42);

        assert_eq!(strategy.method(), Some(PaymentMethod::DebitCard));
        assert_eq!(
            sink.receipts(),
            vec![Receipt::new(PaymentMethod::DebitCard, 42)]
        );
    }

    #[test]
    fn test_fn_strategy_calls_closure() {
        let total = Arc::new(AtomicI64::new(0));
        let seen = total.clone();
        let strategy = FnStrategy::new(move |amount| {
            seen.fetch_add(amount, Ordering::SeqCst);
        });

        strategy.execute(10);
        strategy.execute(5);

        assert_eq!(total.load(Ordering::SeqCst), 15);
        assert_eq!(strategy.method(), None);
    }
}
