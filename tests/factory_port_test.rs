use payment_strategy::application::registry::StrategyRegistry;
use payment_strategy::domain::method::PaymentMethod;
use payment_strategy::domain::ports::StrategyFactory;
use payment_strategy::domain::receipt::Receipt;
use payment_strategy::infrastructure::in_memory::InMemorySink;
use std::sync::Arc;

#[test]
fn test_factory_table_covers_every_method() {
    let sink = InMemorySink::new();

    for method in PaymentMethod::ALL {
        let factory: StrategyFactory = StrategyRegistry::factory(method);
        let strategy = factory(Arc::new(sink.clone()));
        assert_eq!(strategy.method(), Some(method));
        strategy.execute(1);
    }

    let methods: Vec<PaymentMethod> = sink.receipts().iter().map(|r| r.method).collect();
    assert_eq!(methods, PaymentMethod::ALL.to_vec());
}

#[tokio::test]
async fn test_factory_in_task() {
    let sink = InMemorySink::new();
    let factory = StrategyRegistry::factory(PaymentMethod::PayPal);

    let handle = {
        let sink = sink.clone();
        tokio::spawn(async move {
            factory(Arc::new(sink)).execute(200);
        })
    };
    handle.await.unwrap();

    assert_eq!(sink.receipts(), vec![Receipt::new(PaymentMethod::PayPal, 200)]);
}
