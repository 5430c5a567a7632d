use std::sync::atomic::Ordering;

use rust_decimal_macros::dec;

use tandem_domain::id::UserId;
use tandem_domain::order::OrderStatus;
use tandem_domain::user::UserStatus;
use tandem_users::error::UsersServiceError;
use tandem_users::usecase::user_orders::GetUserOrdersUseCase;

use crate::helpers::{MockOrderPort, MockUserRepo, ctx, test_order, test_user};

#[tokio::test]
async fn should_not_call_orders_service_for_unknown_user() {
    let orders = MockOrderPort::returning(vec![]);
    let calls = orders.calls_handle();
    let usecase = GetUserOrdersUseCase {
        users: MockUserRepo::empty(),
        orders,
    };

    let result = usecase.execute(&ctx(), UserId::new()).await;

    assert!(
        matches!(result, Err(UsersServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn should_relay_orders_verbatim_for_existing_user() {
    let alice = test_user("alice@example.com");
    let upstream = vec![
        test_order(alice.id, dec!(10.00), 1, OrderStatus::Delivered),
        test_order(alice.id, dec!(5.00), 2, OrderStatus::Pending),
        test_order(alice.id, dec!(20.00), 1, OrderStatus::Cancelled),
    ];
    let orders = MockOrderPort::returning(upstream.clone());
    let calls = orders.calls_handle();
    let usecase = GetUserOrdersUseCase {
        users: MockUserRepo::new(vec![alice.clone()]),
        orders,
    };

    let result = usecase.execute(&ctx(), alice.id).await.unwrap();

    assert_eq!(result, upstream);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn should_still_fetch_orders_for_inactive_user() {
    let mut alice = test_user("alice@example.com");
    alice.status = UserStatus::Inactive;
    let orders = MockOrderPort::returning(vec![test_order(
        alice.id,
        dec!(3.50),
        1,
        OrderStatus::Shipped,
    )]);
    let usecase = GetUserOrdersUseCase {
        users: MockUserRepo::new(vec![alice.clone()]),
        orders,
    };

    let result = usecase.execute(&ctx(), alice.id).await.unwrap();
    assert_eq!(result.len(), 1);
}

#[tokio::test]
async fn should_distinguish_unavailable_orders_from_missing_user() {
    let alice = test_user("alice@example.com");
    let orders = MockOrderPort::unavailable();
    let calls = orders.calls_handle();
    let usecase = GetUserOrdersUseCase {
        users: MockUserRepo::new(vec![alice.clone()]),
        orders,
    };

    let result = usecase.execute(&ctx(), alice.id).await;

    assert!(
        matches!(result, Err(UsersServiceError::OrderServiceUnavailable)),
        "expected OrderServiceUnavailable, got {result:?}"
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn should_return_empty_list_when_user_has_no_orders() {
    let alice = test_user("alice@example.com");
    let usecase = GetUserOrdersUseCase {
        users: MockUserRepo::new(vec![alice.clone()]),
        orders: MockOrderPort::returning(vec![]),
    };
    let result = usecase.execute(&ctx(), alice.id).await.unwrap();
    assert!(result.is_empty());
}
