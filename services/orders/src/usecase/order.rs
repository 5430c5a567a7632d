use chrono::Utc;

use tandem_core::middleware::RequestContext;
use tandem_domain::id::{OrderId, UserId};

use crate::domain::repository::{OrderRepository, UserPort};
use crate::domain::types::{Order, OrderDraft, TransitionMode};
use crate::error::OrdersServiceError;

pub(crate) async fn load_order<R: OrderRepository>(
    repo: &R,
    ctx: &RequestContext,
    id: OrderId,
) -> Result<Order, OrdersServiceError> {
    repo.find_by_id(id).await?.ok_or_else(|| {
        tracing::warn!(request_id = %ctx.request_id, order_id = %id, "order not found");
        OrdersServiceError::OrderNotFound
    })
}

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> ListOrdersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Order>, OrdersServiceError> {
        self.repo.find_all().await
    }
}

// ── GetOrder ─────────────────────────────────────────────────────────────────

pub struct GetOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> GetOrderUseCase<R> {
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        order_id: OrderId,
    ) -> Result<Order, OrdersServiceError> {
        load_order(&self.repo, ctx, order_id).await
    }
}

// ── ListOrdersForUser ────────────────────────────────────────────────────────

/// Verifies the user upstream before reading local orders.
pub struct ListOrdersForUserUseCase<R, U>
where
    R: OrderRepository,
    U: UserPort,
{
    pub repo: R,
    pub users: U,
}

impl<R, U> ListOrdersForUserUseCase<R, U>
where
    R: OrderRepository,
    U: UserPort,
{
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
    ) -> Result<Vec<Order>, OrdersServiceError> {
        self.users.verify_user(ctx, user_id).await?;
        self.repo.find_by_user(user_id).await
    }
}

// ── CreateOrder ──────────────────────────────────────────────────────────────

pub struct CreateOrderUseCase<R, U>
where
    R: OrderRepository,
    U: UserPort,
{
    pub repo: R,
    pub users: U,
}

impl<R, U> CreateOrderUseCase<R, U>
where
    R: OrderRepository,
    U: UserPort,
{
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        draft: OrderDraft,
    ) -> Result<Order, OrdersServiceError> {
        draft.validate()?;

        // No lock is held between verification and insert: a user deactivated
        // in between still gets the order.
        self.users.verify_user(ctx, draft.user_id).await?;

        let now = Utc::now();
        let order = Order {
            id: OrderId::new(),
            user_id: draft.user_id,
            product_name: draft.product_name,
            quantity: draft.quantity,
            price: draft.price,
            status: draft.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&order).await?;
        tracing::info!(
            request_id = %ctx.request_id,
            order_id = %order.id,
            user_id = %order.user_id,
            status = %order.status,
            "order created"
        );
        Ok(order)
    }
}

// ── UpdateOrder ──────────────────────────────────────────────────────────────

/// Full update. The user is re-verified only when `user_id` changes.
///
/// A status in the body is applied as a checked transition; the unconditional
/// override is `PATCH /orders/{id}/status?force=true`.
pub struct UpdateOrderUseCase<R, U>
where
    R: OrderRepository,
    U: UserPort,
{
    pub repo: R,
    pub users: U,
}

impl<R, U> UpdateOrderUseCase<R, U>
where
    R: OrderRepository,
    U: UserPort,
{
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        order_id: OrderId,
        draft: OrderDraft,
    ) -> Result<Order, OrdersServiceError> {
        draft.validate()?;
        let mut order = load_order(&self.repo, ctx, order_id).await?;

        if order.user_id != draft.user_id {
            self.users.verify_user(ctx, draft.user_id).await?;
        }

        let now = Utc::now();
        if let Some(status) = draft.status {
            order.transition_to(status, TransitionMode::Checked, now)?;
        }
        order.user_id = draft.user_id;
        order.product_name = draft.product_name;
        order.quantity = draft.quantity;
        order.price = draft.price;
        order.updated_at = now;

        self.repo.update(&order).await?;
        tracing::info!(request_id = %ctx.request_id, order_id = %order_id, "order updated");
        Ok(order)
    }
}
