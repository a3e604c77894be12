//! Service-level tests for the order core: lifecycle, discounts, settlement.

mod common;

use common::{CASHIER_ID, GARSON_ID, seed_fixtures, test_pool};
use pos_server::db::repository::{CafeTableRepository, OrderRepository, PaymentRepository};
use pos_server::orders::{
    CreateOrder, OrderUpdate, OrdersManager, ProcessPayment, SettlementProcessor,
};
use shared::error::ErrorCode;
use shared::order::{
    DiscountSpec, DiscountType, OrderItemInput, OrderStatus, PaymentMethod, TableStatus,
};

fn line(menu_item_id: i64, quantity: i64, unit_price: f64) -> OrderItemInput {
    OrderItemInput {
        menu_item_id,
        quantity,
        unit_price,
        notes: None,
    }
}

fn cart(table_id: i64, items: Vec<OrderItemInput>) -> CreateOrder {
    CreateOrder {
        table_id,
        garson_id: Some(GARSON_ID),
        items,
        notes: None,
    }
}

fn percentage(value: f64) -> DiscountSpec {
    DiscountSpec {
        discount_type: DiscountType::Percentage,
        value,
    }
}

fn fixed(value: f64) -> DiscountSpec {
    DiscountSpec {
        discount_type: DiscountType::Fixed,
        value,
    }
}

#[tokio::test]
async fn create_order_computes_totals_and_occupies_table() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());

    let order = manager
        .create_order(cart(1, vec![line(2, 2, 12.00), line(1, 2, 2.00)]))
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_amount, 28.00);
    assert_eq!(order.discount_amount, 0.0);
    assert_eq!(order.final_amount, 28.00);

    // Round-trip: fetching returns identical amounts and line items
    let repo = OrderRepository::new(pool.clone());
    let fetched = repo.find_by_id(order.id).await.unwrap().unwrap();
    assert_eq!(fetched.total_amount, 28.00);
    assert_eq!(fetched.discount_amount, 0.0);
    assert_eq!(fetched.final_amount, 28.00);

    let items = repo.find_items(order.id).await.unwrap();
    assert_eq!(items.len(), 2);
    for item in &items {
        assert_eq!(item.subtotal, item.unit_price * item.quantity as f64);
    }
    assert_eq!(items.iter().map(|i| i.subtotal).sum::<f64>(), 28.00);
    assert_eq!(items[0].menu_item_name_en.as_deref(), Some("Kebab Plate"));

    // Table flipped to occupied and back-references the order
    let table = CafeTableRepository::new(pool.clone())
        .find_by_id(1)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(table.status, TableStatus::Occupied);
    assert_eq!(table.current_order_id, Some(order.id));
}

#[tokio::test]
async fn create_order_rejects_empty_cart() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());

    let err = manager.create_order(cart(1, vec![])).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::OrderEmpty);
}

#[tokio::test]
async fn create_order_rejects_unknown_table_and_menu_item() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());

    let err = manager
        .create_order(cart(999, vec![line(1, 1, 2.00)]))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);

    let err = manager
        .create_order(cart(1, vec![line(999, 1, 2.00)]))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);

    // Nothing was written
    let orders = OrderRepository::new(pool.clone())
        .find_all(None, None)
        .await
        .unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn create_order_conflicts_on_occupied_table() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());

    manager
        .create_order(cart(1, vec![line(1, 1, 2.00)]))
        .await
        .unwrap();

    let err = manager
        .create_order(cart(1, vec![line(1, 1, 2.00)]))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::TableOccupied);
}

#[tokio::test]
async fn status_transitions_are_strict() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());

    let order = manager
        .create_order(cart(1, vec![line(1, 1, 2.00)]))
        .await
        .unwrap();

    // pending -> served skips states
    let err = manager
        .update_order(
            order.id,
            OrderUpdate {
                status: Some(OrderStatus::Served),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidStatusTransition);

    // pending -> preparing -> ready -> served walks the table
    for next in [
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Served,
    ] {
        let updated = manager
            .update_order(
                order.id,
                OrderUpdate {
                    status: Some(next),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, next);
    }

    // Same-state patch is an idempotent no-op success
    let updated = manager
        .update_order(
            order.id,
            OrderUpdate {
                status: Some(OrderStatus::Served),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Served);

    // paid is only reachable through settlement
    let err = manager
        .update_order(
            order.id,
            OrderUpdate {
                status: Some(OrderStatus::Paid),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn cancelling_releases_the_table() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());

    let order = manager
        .create_order(cart(2, vec![line(1, 1, 2.00)]))
        .await
        .unwrap();

    let cancelled = manager
        .update_order(
            order.id,
            OrderUpdate {
                status: Some(OrderStatus::Cancelled),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert!(cancelled.completed_at.is_some());

    let table = CafeTableRepository::new(pool.clone())
        .find_by_id(2)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(table.status, TableStatus::Available);
    assert_eq!(table.current_order_id, None);

    // Terminal: no further transitions
    let err = manager
        .update_order(
            order.id,
            OrderUpdate {
                status: Some(OrderStatus::Preparing),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidStatusTransition);
}

#[tokio::test]
async fn percentage_discount_is_applied() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());

    // 50.00 * 2 = 100.00
    let order = manager
        .create_order(cart(1, vec![line(1, 2, 50.00)]))
        .await
        .unwrap();
    assert_eq!(order.total_amount, 100.00);

    let updated = manager
        .update_order(
            order.id,
            OrderUpdate {
                discount: Some(percentage(10.0)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.discount_amount, 10.00);
    assert_eq!(updated.final_amount, 90.00);

    // Invariant holds in the store as well
    let fetched = OrderRepository::new(pool.clone())
        .find_by_id(order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        fetched.final_amount,
        (fetched.total_amount - fetched.discount_amount).max(0.0)
    );
}

#[tokio::test]
async fn fixed_discount_exceeding_total_is_clamped() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());

    // 10.00 * 2 = 20.00
    let order = manager
        .create_order(cart(1, vec![line(1, 2, 10.00)]))
        .await
        .unwrap();

    let updated = manager
        .update_order(
            order.id,
            OrderUpdate {
                discount: Some(fixed(25.0)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.discount_amount, 20.00);
    assert_eq!(updated.final_amount, 0.00);
}

#[tokio::test]
async fn zero_value_discount_is_rejected_and_changes_nothing() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());

    let order = manager
        .create_order(cart(1, vec![line(1, 2, 10.00)]))
        .await
        .unwrap();

    let err = manager
        .update_order(
            order.id,
            OrderUpdate {
                discount: Some(percentage(0.0)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);

    let fetched = OrderRepository::new(pool.clone())
        .find_by_id(order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.discount_amount, 0.0);
    assert_eq!(fetched.final_amount, 20.00);
}

#[tokio::test]
async fn cash_payment_settles_order_and_frees_table() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());
    let processor = SettlementProcessor::new(pool.clone());

    // 11.00 * 2 = 22.00
    let order = manager
        .create_order(cart(1, vec![line(1, 2, 11.00)]))
        .await
        .unwrap();

    let payment = processor
        .process_payment(ProcessPayment {
            order_id: order.id,
            cashier_id: CASHIER_ID,
            payment_method: PaymentMethod::Cash,
            cash_amount: 25.00,
            card_amount: 0.0,
        })
        .await
        .unwrap();

    assert_eq!(payment.amount_paid, 22.00);
    assert_eq!(payment.cash_amount, 25.00);
    assert_eq!(payment.change_given, 3.00);

    let fetched = OrderRepository::new(pool.clone())
        .find_by_id(order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.status, OrderStatus::Paid);
    assert_eq!(fetched.payment_method, Some(PaymentMethod::Cash));
    assert!(fetched.completed_at.is_some());

    let table = CafeTableRepository::new(pool.clone())
        .find_by_id(1)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(table.status, TableStatus::Available);
    assert_eq!(table.current_order_id, None);
}

#[tokio::test]
async fn card_payment_is_charged_exactly() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());
    let processor = SettlementProcessor::new(pool.clone());

    let order = manager
        .create_order(cart(1, vec![line(2, 1, 12.00)]))
        .await
        .unwrap();

    let payment = processor
        .process_payment(ProcessPayment {
            order_id: order.id,
            cashier_id: CASHIER_ID,
            payment_method: PaymentMethod::Card,
            cash_amount: 0.0,
            card_amount: 0.0,
        })
        .await
        .unwrap();

    assert_eq!(payment.amount_paid, 12.00);
    assert_eq!(payment.card_amount, 12.00);
    assert_eq!(payment.cash_amount, 0.0);
    assert_eq!(payment.change_given, 0.0);
}

#[tokio::test]
async fn mixed_payment_below_final_amount_is_rejected() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());
    let processor = SettlementProcessor::new(pool.clone());

    // 25.00 * 2 = 50.00
    let order = manager
        .create_order(cart(1, vec![line(1, 2, 25.00)]))
        .await
        .unwrap();

    let err = processor
        .process_payment(ProcessPayment {
            order_id: order.id,
            cashier_id: CASHIER_ID,
            payment_method: PaymentMethod::Mixed,
            cash_amount: 20.00,
            card_amount: 15.00,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::PaymentInsufficientAmount);

    // Order untouched, no payment recorded, table still occupied
    let fetched = OrderRepository::new(pool.clone())
        .find_by_id(order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.status, OrderStatus::Pending);

    let payments = PaymentRepository::new(pool.clone())
        .list_by_order(order.id)
        .await
        .unwrap();
    assert!(payments.is_empty());

    let table = CafeTableRepository::new(pool.clone())
        .find_by_id(1)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(table.status, TableStatus::Occupied);
}

#[tokio::test]
async fn settlement_happens_at_most_once() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());
    let processor = SettlementProcessor::new(pool.clone());

    let order = manager
        .create_order(cart(1, vec![line(1, 1, 2.00)]))
        .await
        .unwrap();

    let pay = |method| ProcessPayment {
        order_id: order.id,
        cashier_id: CASHIER_ID,
        payment_method: method,
        cash_amount: 10.00,
        card_amount: 0.0,
    };

    processor.process_payment(pay(PaymentMethod::Cash)).await.unwrap();
    let err = processor
        .process_payment(pay(PaymentMethod::Cash))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::OrderAlreadyPaid);

    let payments = PaymentRepository::new(pool.clone())
        .list_by_order(order.id)
        .await
        .unwrap();
    assert_eq!(payments.len(), 1);
}

#[tokio::test]
async fn settlement_rejects_cancelled_and_unknown_orders() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());
    let processor = SettlementProcessor::new(pool.clone());

    let order = manager
        .create_order(cart(1, vec![line(1, 1, 2.00)]))
        .await
        .unwrap();
    manager
        .update_order(
            order.id,
            OrderUpdate {
                status: Some(OrderStatus::Cancelled),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let err = processor
        .process_payment(ProcessPayment {
            order_id: order.id,
            cashier_id: CASHIER_ID,
            payment_method: PaymentMethod::Cash,
            cash_amount: 10.00,
            card_amount: 0.0,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::OrderAlreadyCancelled);

    let err = processor
        .process_payment(ProcessPayment {
            order_id: 9999,
            cashier_id: CASHIER_ID,
            payment_method: PaymentMethod::Cash,
            cash_amount: 10.00,
            card_amount: 0.0,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::OrderNotFound);
}

#[tokio::test]
async fn discount_then_payment_keeps_amounts_consistent() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let manager = OrdersManager::new(pool.clone());
    let processor = SettlementProcessor::new(pool.clone());

    // 14.00 * 2 = 28.00, 15% -> 4.20 off, 23.80 due
    let order = manager
        .create_order(cart(1, vec![line(2, 2, 14.00)]))
        .await
        .unwrap();
    let discounted = manager
        .update_order(
            order.id,
            OrderUpdate {
                discount: Some(percentage(15.0)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(discounted.discount_amount, 4.20);
    assert_eq!(discounted.final_amount, 23.80);

    let payment = processor
        .process_payment(ProcessPayment {
            order_id: order.id,
            cashier_id: CASHIER_ID,
            payment_method: PaymentMethod::Cash,
            cash_amount: 30.00,
            card_amount: 0.0,
        })
        .await
        .unwrap();
    assert_eq!(payment.amount_paid, 23.80);
    assert_eq!(payment.change_given, 6.20);

    let fetched = OrderRepository::new(pool.clone())
        .find_by_id(order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.status, OrderStatus::Paid);
    assert_eq!(
        fetched.final_amount,
        (fetched.total_amount - fetched.discount_amount).max(0.0)
    );
}
