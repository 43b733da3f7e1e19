use super::context::PaymentContext;
use crate::domain::ports::PaymentStrategyRef;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A [`PaymentContext`] that can be shared between tasks.
///
/// Uses `Arc<RwLock<PaymentContext>>`: rebinding takes the write lock and
/// payments take the read lock, so a payment never sees a half-applied rebind.
/// Clones share the same binding.
#[derive(Clone)]
pub struct SharedPaymentContext {
    inner: Arc<RwLock<PaymentContext>>,
}

impl SharedPaymentContext {
    /// Creates a shared context bound to `strategy`.
    pub fn new(strategy: PaymentStrategyRef) -> Self {
        Self {
            inner: Arc::new(RwLock::new(PaymentContext::new(strategy))),
        }
    }

    /// A handle to the strategy payments currently go through.
    pub async fn strategy(&self) -> PaymentStrategyRef {
        self.inner.read().await.strategy().clone()
    }

    /// Replaces the strategy for every clone of this handle.
    pub async fn set_strategy(&self, strategy: PaymentStrategyRef) {
        self.inner.write().await.set_strategy(strategy);
    }

    /// Pays `amount` with the current strategy under the read lock.
    pub async fn pay(&self, amount: i64) {
        self.inner.read().await.pay(amount);
    }
}

impl From<PaymentContext> for SharedPaymentContext {
    fn from(context: PaymentContext) -> Self {
        Self {
            inner: Arc::new(RwLock::new(context)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::registry::StrategyRegistry;
    use crate::domain::method::PaymentMethod;
    use crate::domain::receipt::Receipt;
    use crate::infrastructure::in_memory::InMemorySink;

    #[tokio::test]
    async fn test_rebind_visible_to_clones() {
        let sink = InMemorySink::new();
        let registry = StrategyRegistry::new(Arc::new(sink.clone()));
        let context = SharedPaymentContext::new(registry.resolve(PaymentMethod::Cash));
        let other = context.clone();

        other.set_strategy(registry.resolve(PaymentMethod::PayPal)).await;
        context.pay(200).await;

        assert_eq!(context.strategy().await.method(), Some(PaymentMethod::PayPal));
        assert_eq!(sink.receipts(), vec![Receipt::new(PaymentMethod::PayPal, 200)]);
    }

    #[tokio::test]
    async fn test_concurrent_payments() {
        let sink = InMemorySink::new();
        let registry = StrategyRegistry::new(Arc::new(sink.clone()));
        let context: SharedPaymentContext =
            PaymentContext::new(registry.resolve(PaymentMethod::DebitCard)).into();

        let mut handles = Vec::new();
        for i in 1..=50 {
            let context = context.clone();
            handles.push(tokio::spawn(async move { context.pay(i).await }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let receipts = sink.receipts();
        assert_eq!(receipts.len(), 50);
        assert!(receipts.iter().all(|r| r.method == PaymentMethod::DebitCard));
        assert_eq!(receipts.iter().map(|r| r.amount).sum::<i64>(), (1..=50).sum::<i64>());
    }
}
