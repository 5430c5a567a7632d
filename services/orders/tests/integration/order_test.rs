use rust_decimal_macros::dec;

use tandem_domain::id::{OrderId, UserId};
use tandem_domain::order::OrderStatus;
use tandem_domain::user::UserStatus;
use tandem_orders::error::OrdersServiceError;
use tandem_orders::usecase::aggregation::TotalAmountByUserUseCase;
use tandem_orders::usecase::order::{
    CreateOrderUseCase, GetOrderUseCase, ListOrdersForUserUseCase, UpdateOrderUseCase,
};

use crate::helpers::{
    AfterVerify, MockOrderRepo, MockUserPort, StaleUserPort, ctx, draft, remote_user, test_order,
};

// ── create ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_pending_order_for_known_user() {
    let user = remote_user(UserStatus::Active);
    let repo = MockOrderRepo::empty();
    let usecase = CreateOrderUseCase {
        repo: repo.clone(),
        users: MockUserPort::with_users(vec![user.clone()]),
    };

    let order = usecase
        .execute(&ctx(), draft(user.id, dec!(9.99), 2))
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.created_at, order.updated_at);
    assert_eq!(usecase.users.calls(), 1);
    assert_eq!(repo.stored(order.id), Some(order));

    let total = TotalAmountByUserUseCase { repo }
        .execute(user.id)
        .await
        .unwrap();
    assert_eq!(total, dec!(19.98));
}

#[tokio::test]
async fn should_honor_requested_initial_status() {
    let user = remote_user(UserStatus::Active);
    let usecase = CreateOrderUseCase {
        repo: MockOrderRepo::empty(),
        users: MockUserPort::with_users(vec![user.clone()]),
    };
    let mut input = draft(user.id, dec!(5.00), 1);
    input.status = Some(OrderStatus::Confirmed);

    let order = usecase.execute(&ctx(), input).await.unwrap();

    assert_eq!(order.status, OrderStatus::Confirmed);
}

#[tokio::test]
async fn should_not_write_when_user_is_unknown() {
    let repo = MockOrderRepo::empty();
    let usecase = CreateOrderUseCase {
        repo: repo.clone(),
        users: MockUserPort::with_users(vec![]),
    };

    let result = usecase
        .execute(&ctx(), draft(UserId::new(), dec!(9.99), 2))
        .await;

    assert!(matches!(result, Err(OrdersServiceError::UserNotFound)));
    assert_eq!(repo.writes(), 0);
    assert!(repo.orders_handle().lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_not_write_when_user_service_is_unavailable() {
    let repo = MockOrderRepo::empty();
    let usecase = CreateOrderUseCase {
        repo: repo.clone(),
        users: MockUserPort::unavailable(),
    };

    let result = usecase
        .execute(&ctx(), draft(UserId::new(), dec!(9.99), 2))
        .await;

    assert!(matches!(
        result,
        Err(OrdersServiceError::UserServiceUnavailable)
    ));
    assert_eq!(repo.writes(), 0);
}

#[tokio::test]
async fn should_reject_invalid_draft_without_calling_users_service() {
    let user = remote_user(UserStatus::Active);
    let usecase = CreateOrderUseCase {
        repo: MockOrderRepo::empty(),
        users: MockUserPort::with_users(vec![user.clone()]),
    };

    let result = usecase.execute(&ctx(), draft(user.id, dec!(9.99), 0)).await;

    assert!(matches!(
        result,
        Err(OrdersServiceError::Validation("quantity"))
    ));
    assert_eq!(usecase.users.calls(), 0);
    assert_eq!(usecase.repo.writes(), 0);
}

#[tokio::test]
async fn should_create_order_for_inactive_user() {
    let user = remote_user(UserStatus::Inactive);
    let usecase = CreateOrderUseCase {
        repo: MockOrderRepo::empty(),
        users: MockUserPort::with_users(vec![user.clone()]),
    };

    let result = usecase.execute(&ctx(), draft(user.id, dec!(1.00), 1)).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn should_keep_order_when_user_vanishes_after_verification() {
    // Verification and insert are not atomic: the user is gone by the time
    // the order is written, and the write still happens.
    let user = remote_user(UserStatus::Active);
    let users = MockUserPort::with_users(vec![user.clone()]);
    let repo = MockOrderRepo::empty();
    let usecase = CreateOrderUseCase {
        repo: repo.clone(),
        users: StaleUserPort {
            inner: users.clone(),
            after: AfterVerify::Remove,
        },
    };

    let order = usecase
        .execute(&ctx(), draft(user.id, dec!(3.50), 2))
        .await
        .unwrap();

    assert!(users.users_handle().lock().unwrap().is_empty());
    assert_eq!(users.calls(), 1);
    assert_eq!(repo.writes(), 1);
    assert_eq!(repo.stored(order.id).map(|o| o.user_id), Some(user.id));

    let listed = ListOrdersForUserUseCase { repo, users }
        .execute(&ctx(), user.id)
        .await;
    assert!(matches!(listed, Err(OrdersServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_keep_order_when_user_deactivates_after_verification() {
    let user = remote_user(UserStatus::Active);
    let users = MockUserPort::with_users(vec![user.clone()]);
    let repo = MockOrderRepo::empty();
    let usecase = CreateOrderUseCase {
        repo: repo.clone(),
        users: StaleUserPort {
            inner: users.clone(),
            after: AfterVerify::Deactivate,
        },
    };

    let order = usecase
        .execute(&ctx(), draft(user.id, dec!(3.50), 2))
        .await
        .unwrap();

    let upstream = users.users_handle().lock().unwrap().clone();
    assert_eq!(upstream[0].status, UserStatus::Inactive);
    assert_eq!(repo.writes(), 1);
    assert_eq!(repo.stored(order.id).map(|o| o.status), Some(OrderStatus::Pending));
}

// ── get / list ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_order_not_found() {
    let usecase = GetOrderUseCase {
        repo: MockOrderRepo::empty(),
    };

    let result = usecase.execute(&ctx(), OrderId::new()).await;

    assert!(matches!(result, Err(OrdersServiceError::OrderNotFound)));
}

#[tokio::test]
async fn should_list_only_orders_of_verified_user() {
    let alice = remote_user(UserStatus::Active);
    let bob = remote_user(UserStatus::Active);
    let repo = MockOrderRepo::new(vec![
        test_order(alice.id, dec!(1.00), 1, OrderStatus::Pending),
        test_order(bob.id, dec!(2.00), 1, OrderStatus::Pending),
        test_order(alice.id, dec!(3.00), 1, OrderStatus::Cancelled),
    ]);
    let usecase = ListOrdersForUserUseCase {
        repo,
        users: MockUserPort::with_users(vec![alice.clone(), bob]),
    };

    let orders = usecase.execute(&ctx(), alice.id).await.unwrap();

    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o.user_id == alice.id));
    assert_eq!(usecase.users.calls(), 1);
}

#[tokio::test]
async fn should_not_list_when_user_is_unknown() {
    let stray = UserId::new();
    let usecase = ListOrdersForUserUseCase {
        repo: MockOrderRepo::new(vec![test_order(
            stray,
            dec!(1.00),
            1,
            OrderStatus::Pending,
        )]),
        users: MockUserPort::with_users(vec![]),
    };

    let result = usecase.execute(&ctx(), stray).await;

    assert!(matches!(result, Err(OrdersServiceError::UserNotFound)));
}

// ── update ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_skip_verification_when_user_unchanged() {
    let user = remote_user(UserStatus::Active);
    let existing = test_order(user.id, dec!(9.99), 2, OrderStatus::Pending);
    let usecase = UpdateOrderUseCase {
        repo: MockOrderRepo::new(vec![existing.clone()]),
        // Unavailable would fail any verification attempt.
        users: MockUserPort::unavailable(),
    };

    let mut input = draft(user.id, dec!(4.50), 3);
    input.product_name = "Gadget".to_owned();
    let updated = usecase.execute(&ctx(), existing.id, input).await.unwrap();

    assert_eq!(usecase.users.calls(), 0);
    assert_eq!(updated.product_name, "Gadget");
    assert_eq!(updated.quantity, 3);
    assert_eq!(updated.price, dec!(4.50));
    assert_eq!(updated.status, OrderStatus::Pending);
    assert_eq!(updated.created_at, existing.created_at);
    assert!(updated.updated_at >= existing.updated_at);
}

#[tokio::test]
async fn should_verify_once_when_user_changes() {
    let old_owner = remote_user(UserStatus::Active);
    let new_owner = remote_user(UserStatus::Active);
    let existing = test_order(old_owner.id, dec!(9.99), 2, OrderStatus::Pending);
    let repo = MockOrderRepo::new(vec![existing.clone()]);
    let usecase = UpdateOrderUseCase {
        repo: repo.clone(),
        users: MockUserPort::with_users(vec![old_owner, new_owner.clone()]),
    };

    let updated = usecase
        .execute(&ctx(), existing.id, draft(new_owner.id, dec!(9.99), 2))
        .await
        .unwrap();

    assert_eq!(usecase.users.calls(), 1);
    assert_eq!(updated.user_id, new_owner.id);
    assert_eq!(repo.stored(existing.id).map(|o| o.user_id), Some(new_owner.id));
}

#[tokio::test]
async fn should_leave_order_unmodified_when_new_user_is_unknown() {
    let owner = remote_user(UserStatus::Active);
    let existing = test_order(owner.id, dec!(9.99), 2, OrderStatus::Pending);
    let repo = MockOrderRepo::new(vec![existing.clone()]);
    let usecase = UpdateOrderUseCase {
        repo: repo.clone(),
        users: MockUserPort::with_users(vec![owner]),
    };

    let result = usecase
        .execute(&ctx(), existing.id, draft(UserId::new(), dec!(1.00), 1))
        .await;

    assert!(matches!(result, Err(OrdersServiceError::UserNotFound)));
    assert_eq!(repo.writes(), 0);
    assert_eq!(repo.stored(existing.id), Some(existing));
}

#[tokio::test]
async fn should_apply_status_in_update_as_checked_transition() {
    let owner = remote_user(UserStatus::Active);
    let existing = test_order(owner.id, dec!(9.99), 2, OrderStatus::Delivered);
    let repo = MockOrderRepo::new(vec![existing.clone()]);
    let usecase = UpdateOrderUseCase {
        repo: repo.clone(),
        users: MockUserPort::with_users(vec![owner.clone()]),
    };

    let mut input = draft(owner.id, dec!(9.99), 2);
    input.status = Some(OrderStatus::Pending);
    let result = usecase.execute(&ctx(), existing.id, input).await;

    assert!(matches!(
        result,
        Err(OrdersServiceError::InvalidStatusTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Pending,
        })
    ));
    assert_eq!(repo.stored(existing.id), Some(existing));
}

#[tokio::test]
async fn should_return_order_not_found_on_update_of_missing_order() {
    let owner = remote_user(UserStatus::Active);
    let usecase = UpdateOrderUseCase {
        repo: MockOrderRepo::empty(),
        users: MockUserPort::with_users(vec![owner.clone()]),
    };

    let result = usecase
        .execute(&ctx(), OrderId::new(), draft(owner.id, dec!(1.00), 1))
        .await;

    assert!(matches!(result, Err(OrdersServiceError::OrderNotFound)));
    assert_eq!(usecase.users.calls(), 0);
}
