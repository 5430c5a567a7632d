use tandem_core::middleware::RequestContext;
use tandem_domain::id::UserId;

use crate::domain::repository::{OrderPort, UserRepository};
use crate::domain::types::RemoteOrder;
use crate::error::UsersServiceError;

/// Combined "user with orders" read: confirm the user locally, then ask the
/// orders service for the user's orders.
pub struct GetUserOrdersUseCase<R, O>
where
    R: UserRepository,
    O: OrderPort,
{
    pub users: R,
    pub orders: O,
}

impl<R, O> GetUserOrdersUseCase<R, O>
where
    R: UserRepository,
    O: OrderPort,
{
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
    ) -> Result<Vec<RemoteOrder>, UsersServiceError> {
        // 1. Local existence check → 404 without any outbound call
        if !self.users.exists_by_id(user_id).await? {
            tracing::warn!(request_id = %ctx.request_id, user_id = %user_id, "user not found; skipping orders lookup");
            return Err(UsersServiceError::UserNotFound);
        }

        // 2. One upstream call; failures surface as OrderServiceUnavailable
        let orders = self.orders.fetch_orders_for_user(ctx, user_id).await?;
        tracing::info!(
            request_id = %ctx.request_id,
            user_id = %user_id,
            count = orders.len(),
            "fetched user orders"
        );
        Ok(orders)
    }
}
