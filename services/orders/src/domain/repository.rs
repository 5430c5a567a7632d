#![allow(async_fn_in_trait)]

use rust_decimal::Decimal;

use tandem_core::middleware::RequestContext;
use tandem_domain::id::{OrderId, UserId};
use tandem_domain::order::OrderStatus;

use crate::domain::types::{Order, RemoteUser};
use crate::error::OrdersServiceError;

/// Repository for order records.
pub trait OrderRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Order>, OrdersServiceError>;
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrdersServiceError>;
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Order>, OrdersServiceError>;
    async fn create(&self, order: &Order) -> Result<(), OrdersServiceError>;
    /// Overwrite every mutable column of an existing order (last write wins).
    async fn update(&self, order: &Order) -> Result<(), OrdersServiceError>;
    async fn count_by_status(&self, status: OrderStatus) -> Result<u64, OrdersServiceError>;
    /// Counts every order of the user, cancelled ones included.
    async fn count_by_user(&self, user_id: UserId) -> Result<u64, OrdersServiceError>;
    /// `SUM(price * quantity)` over the user's non-cancelled orders; zero when none.
    async fn total_amount_by_user(&self, user_id: UserId) -> Result<Decimal, OrdersServiceError>;
}

/// Port for verifying users against the users service.
pub trait UserPort: Send + Sync {
    /// Existence check only. An inactive user still verifies.
    ///
    /// `UserNotFound` when the users service says the user does not exist,
    /// `UserServiceUnavailable` for every other failure.
    async fn verify_user(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
    ) -> Result<RemoteUser, OrdersServiceError>;
}
