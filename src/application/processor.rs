use super::context::PaymentContext;
use super::registry::StrategyRegistry;
use crate::domain::instruction::PaymentInstruction;
use crate::error::Result;

/// Drives payment instructions through a registry and a context.
///
/// `PaymentProcessor` resolves the strategy named by each instruction, binds it
/// into its context (created on the first instruction) and pays the amount.
pub struct PaymentProcessor {
    registry: StrategyRegistry,
    context: Option<PaymentContext>,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor` resolving strategies from `registry`.
    pub fn new(registry: StrategyRegistry) -> Self {
        Self {
            registry,
            context: None,
        }
    }

    /// Processes a single payment instruction.
    ///
    /// An unknown method fails with `PaymentError::UnknownStrategyKey` before
    /// anything is paid, leaving the current binding as it was.
    pub fn process(&mut self, instruction: PaymentInstruction) -> Result<()> {
        let strategy = self.registry.resolve_key(&instruction.method)?;

        match self.context.as_mut() {
            Some(context) => {
                context.set_strategy(strategy);
                context.pay(instruction.amount);
            }
            None => {
                let context = PaymentContext::new(strategy);
                context.pay(instruction.amount);
                self.context = Some(context);
            }
        }
        Ok(())
    }

    /// The context payments are going through, once the first instruction bound one.
    pub fn context(&self) -> Option<&PaymentContext> {
        self.context.as_ref()
    }
}

/// The fixed demonstration sequence: cash, PayPal, credit card, then bank transfer.
pub fn demo_instructions() -> Vec<PaymentInstruction> {
    vec![
        PaymentInstruction::new("cash", 100),
        PaymentInstruction::new("paypal", 200),
        PaymentInstruction::new("credit_card", 300),
        PaymentInstruction::new("bank_transfer", 400),
    ]
}
