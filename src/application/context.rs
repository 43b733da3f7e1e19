use crate::domain::ports::PaymentStrategyRef;
use tracing::debug;

/// Holds the currently selected payment strategy and pays through it.
///
/// A context always has a strategy: one is required at construction and
/// [`PaymentContext::set_strategy`] only ever replaces it.
#[derive(Clone)]
pub struct PaymentContext {
    strategy: PaymentStrategyRef,
}

impl PaymentContext {
    /// Creates a new `PaymentContext` bound to `strategy`.
    pub fn new(strategy: PaymentStrategyRef) -> Self {
        Self { strategy }
    }

    /// The strategy payments currently go through.
    pub fn strategy(&self) -> &PaymentStrategyRef {
        &self.strategy
    }

    /// Replaces the current strategy. Takes effect on the next [`PaymentContext::pay`].
    pub fn set_strategy(&mut self, strategy: PaymentStrategyRef) {
        debug!(
            from = ?self.strategy.method(),
            to = ?strategy.method(),
            "Rebinding payment strategy"
        );
        self.strategy = strategy;
    }

    /// Pays `amount` with the current strategy.
    ///
    /// The amount is passed through untouched; zero and negative values are
    /// the strategy's business.
    pub fn pay(&self, amount: i64) {
        debug!(method = ?self.strategy.method(), amount, "Paying");
        self.strategy.execute(amount);
    }
}
