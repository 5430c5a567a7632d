use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tandem_domain::id::UserId;
use tandem_domain::order::OrderStatus;
use tandem_domain::user::UserStatus;
use tandem_orders::domain::types::TransitionMode;
use tandem_orders::usecase::aggregation::{
    CountOrdersByStatusUseCase, CountOrdersByUserUseCase, TotalAmountByUserUseCase,
};
use tandem_orders::usecase::lifecycle::{CancelOrderUseCase, UpdateOrderStatusUseCase};
use tandem_orders::usecase::order::{CreateOrderUseCase, ListOrdersUseCase};

use crate::helpers::{MockOrderRepo, MockUserPort, ctx, draft, remote_user, test_order};

#[tokio::test]
async fn should_exclude_cancelled_orders_from_total() {
    let user_id = UserId::new();
    let repo = MockOrderRepo::new(vec![
        test_order(user_id, dec!(10.00), 1, OrderStatus::Pending),
        test_order(user_id, dec!(5.00), 2, OrderStatus::Delivered),
        test_order(user_id, dec!(20.00), 1, OrderStatus::Cancelled),
    ]);

    let total = TotalAmountByUserUseCase { repo }
        .execute(user_id)
        .await
        .unwrap();

    assert_eq!(total, dec!(20.00));
}

#[tokio::test]
async fn should_return_zero_total_for_user_without_orders() {
    let repo = MockOrderRepo::new(vec![test_order(
        UserId::new(),
        dec!(10.00),
        1,
        OrderStatus::Pending,
    )]);

    let total = TotalAmountByUserUseCase { repo }
        .execute(UserId::new())
        .await
        .unwrap();

    assert_eq!(total, Decimal::ZERO);
}

#[tokio::test]
async fn should_keep_soft_deleted_order_in_listing_and_count_but_not_total() {
    let user_id = UserId::new();
    let kept = test_order(user_id, dec!(10.00), 1, OrderStatus::Pending);
    let cancelled = test_order(user_id, dec!(7.25), 4, OrderStatus::Confirmed);
    let repo = MockOrderRepo::new(vec![kept, cancelled.clone()]);

    CancelOrderUseCase { repo: repo.clone() }
        .execute(&ctx(), cancelled.id)
        .await
        .unwrap();

    let listed = ListOrdersUseCase { repo: repo.clone() }
        .execute()
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().any(|o| o.id == cancelled.id));

    let count = CountOrdersByUserUseCase { repo: repo.clone() }
        .execute(user_id)
        .await
        .unwrap();
    assert_eq!(count, 2);

    let total = TotalAmountByUserUseCase { repo }
        .execute(user_id)
        .await
        .unwrap();
    assert_eq!(total, dec!(10.00));
}

#[tokio::test]
async fn should_count_pending_exactly_across_unrelated_operations() {
    let user = remote_user(UserStatus::Active);
    let shipped = test_order(user.id, dec!(1.00), 1, OrderStatus::Shipped);
    let confirmed = test_order(user.id, dec!(1.00), 1, OrderStatus::Confirmed);
    let repo = MockOrderRepo::new(vec![
        test_order(user.id, dec!(1.00), 1, OrderStatus::Pending),
        test_order(user.id, dec!(2.00), 1, OrderStatus::Pending),
        shipped.clone(),
        confirmed.clone(),
    ]);
    let count_pending = CountOrdersByStatusUseCase { repo: repo.clone() };
    assert_eq!(count_pending.execute(OrderStatus::Pending).await.unwrap(), 2);

    // Operations that never touch PENDING orders.
    UpdateOrderStatusUseCase { repo: repo.clone() }
        .execute(
            &ctx(),
            shipped.id,
            OrderStatus::Delivered,
            TransitionMode::Checked,
        )
        .await
        .unwrap();
    CancelOrderUseCase { repo: repo.clone() }
        .execute(&ctx(), confirmed.id)
        .await
        .unwrap();
    let mut input = draft(user.id, dec!(3.00), 1);
    input.status = Some(OrderStatus::Confirmed);
    CreateOrderUseCase {
        repo: repo.clone(),
        users: MockUserPort::with_users(vec![user]),
    }
    .execute(&ctx(), input)
    .await
    .unwrap();

    assert_eq!(count_pending.execute(OrderStatus::Pending).await.unwrap(), 2);
    assert_eq!(
        CountOrdersByStatusUseCase { repo }
            .execute(OrderStatus::Cancelled)
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn should_count_orders_per_user_only() {
    let alice = UserId::new();
    let bob = UserId::new();
    let repo = MockOrderRepo::new(vec![
        test_order(alice, dec!(1.00), 1, OrderStatus::Pending),
        test_order(alice, dec!(1.00), 1, OrderStatus::Cancelled),
        test_order(bob, dec!(1.00), 1, OrderStatus::Pending),
    ]);
    let usecase = CountOrdersByUserUseCase { repo };

    assert_eq!(usecase.execute(alice).await.unwrap(), 2);
    assert_eq!(usecase.execute(bob).await.unwrap(), 1);
    assert_eq!(usecase.execute(UserId::new()).await.unwrap(), 0);
}
