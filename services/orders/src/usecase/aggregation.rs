use rust_decimal::Decimal;

use tandem_domain::id::UserId;
use tandem_domain::order::OrderStatus;

use crate::domain::repository::OrderRepository;
use crate::error::OrdersServiceError;

// Aggregations read the local store only; no user verification.

pub struct CountOrdersByStatusUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> CountOrdersByStatusUseCase<R> {
    pub async fn execute(&self, status: OrderStatus) -> Result<u64, OrdersServiceError> {
        self.repo.count_by_status(status).await
    }
}

pub struct CountOrdersByUserUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> CountOrdersByUserUseCase<R> {
    pub async fn execute(&self, user_id: UserId) -> Result<u64, OrdersServiceError> {
        self.repo.count_by_user(user_id).await
    }
}

pub struct TotalAmountByUserUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> TotalAmountByUserUseCase<R> {
    pub async fn execute(&self, user_id: UserId) -> Result<Decimal, OrdersServiceError> {
        self.repo.total_amount_by_user(user_id).await
    }
}
