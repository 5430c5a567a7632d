use reqwest::StatusCode;
use serde::Deserialize;

use tandem_core::middleware::{REQUEST_ID_HEADER, RequestContext};
use tandem_domain::id::UserId;
use tandem_domain::user::UserStatus;

use crate::domain::repository::UserPort;
use crate::domain::types::RemoteUser;
use crate::error::OrdersServiceError;

/// HTTP client implementing `UserPort` against the users service's public
/// `GET /users/{id}` endpoint.
#[derive(Clone)]
pub struct HttpUserClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

/// Subset of the users service's user body. Extra fields are ignored.
#[derive(Deserialize)]
struct UserPayload {
    id: UserId,
    name: String,
    status: UserStatus,
}

impl UserPort for HttpUserClient {
    async fn verify_user(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
    ) -> Result<RemoteUser, OrdersServiceError> {
        let url = format!("{}/users/{user_id}", self.base_url);
        let unavailable = |stage: &str, error: &dyn std::fmt::Display| {
            tracing::error!(
                request_id = %ctx.request_id,
                user_id = %user_id,
                stage,
                error = %error,
                "users service call failed"
            );
            OrdersServiceError::UserServiceUnavailable
        };

        let response = self
            .client
            .get(&url)
            .header(REQUEST_ID_HEADER, &ctx.request_id)
            .send()
            .await
            .map_err(|e| unavailable("send", &e))?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                tracing::warn!(request_id = %ctx.request_id, user_id = %user_id, "user not found upstream");
                return Err(OrdersServiceError::UserNotFound);
            }
            status if !status.is_success() => return Err(unavailable("status", &status)),
            _ => {}
        }

        let user: UserPayload = response
            .json()
            .await
            .map_err(|e| unavailable("decode", &e))?;

        tracing::debug!(request_id = %ctx.request_id, user_id = %user.id, status = %user.status, "user verified");
        Ok(RemoteUser {
            id: user.id,
            name: user.name,
            status: user.status,
        })
    }
}
