use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use tandem_core::middleware::{REQUEST_ID_HEADER, RequestContext};
use tandem_domain::id::{OrderId, UserId};
use tandem_domain::order::OrderStatus;

use crate::domain::repository::OrderPort;
use crate::domain::types::RemoteOrder;
use crate::error::UsersServiceError;

/// HTTP client implementing `OrderPort` against the orders service's public
/// `GET /orders/user/{userId}` endpoint.
///
/// No retries and no timeout beyond the transport default.
#[derive(Clone)]
pub struct HttpOrderClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

/// Order as serialized by the orders service.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderPayload {
    id: OrderId,
    user_id: UserId,
    product_name: String,
    quantity: i32,
    price: Decimal,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<OrderPayload> for RemoteOrder {
    fn from(p: OrderPayload) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            product_name: p.product_name,
            quantity: p.quantity,
            price: p.price,
            status: p.status,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl OrderPort for HttpOrderClient {
    async fn fetch_orders_for_user(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
    ) -> Result<Vec<RemoteOrder>, UsersServiceError> {
        let url = format!("{}/orders/user/{user_id}", self.base_url);
        let unavailable = |stage: &str, error: &dyn std::fmt::Display| {
            tracing::error!(
                request_id = %ctx.request_id,
                user_id = %user_id,
                stage,
                error = %error,
                "orders service call failed"
            );
            UsersServiceError::OrderServiceUnavailable
        };

        let response = self
            .client
            .get(&url)
            .header(REQUEST_ID_HEADER, &ctx.request_id)
            .send()
            .await
            .map_err(|e| unavailable("send", &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable("status", &status));
        }

        let orders: Vec<OrderPayload> = response
            .json()
            .await
            .map_err(|e| unavailable("decode", &e))?;

        Ok(orders.into_iter().map(RemoteOrder::from).collect())
    }
}
