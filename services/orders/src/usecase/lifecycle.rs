use chrono::Utc;

use tandem_core::middleware::RequestContext;
use tandem_domain::id::OrderId;
use tandem_domain::order::OrderStatus;

use crate::domain::repository::OrderRepository;
use crate::domain::types::{Order, TransitionMode};
use crate::error::OrdersServiceError;
use crate::usecase::order::load_order;

// ── UpdateOrderStatus ────────────────────────────────────────────────────────

pub struct UpdateOrderStatusUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> UpdateOrderStatusUseCase<R> {
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        order_id: OrderId,
        next: OrderStatus,
        mode: TransitionMode,
    ) -> Result<Order, OrdersServiceError> {
        let mut order = load_order(&self.repo, ctx, order_id).await?;
        let previous = order.status;
        order
            .transition_to(next, mode, Utc::now())
            .inspect_err(|_| {
                tracing::warn!(
                    request_id = %ctx.request_id,
                    order_id = %order_id,
                    from = %previous,
                    to = %next,
                    "rejected status transition"
                );
            })?;
        self.repo.update(&order).await?;
        tracing::info!(
            request_id = %ctx.request_id,
            order_id = %order_id,
            from = %previous,
            to = %next,
            forced = mode == TransitionMode::Forced,
            "order status changed"
        );
        Ok(order)
    }
}

// ── CancelOrder (soft delete) ────────────────────────────────────────────────

/// The row is kept with status `CANCELLED`.
pub struct CancelOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> CancelOrderUseCase<R> {
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        order_id: OrderId,
    ) -> Result<(), OrdersServiceError> {
        let mut order = load_order(&self.repo, ctx, order_id).await?;
        order.cancel(Utc::now());
        self.repo.update(&order).await?;
        tracing::info!(request_id = %ctx.request_id, order_id = %order_id, "order cancelled");
        Ok(())
    }
}
