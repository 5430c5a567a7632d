#![allow(async_fn_in_trait)]

use tandem_core::middleware::RequestContext;
use tandem_domain::id::UserId;
use tandem_domain::user::UserStatus;

use crate::domain::types::{RemoteOrder, User};
use crate::error::UsersServiceError;

/// Repository for user records.
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>, UsersServiceError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UsersServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UsersServiceError>;
    async fn exists_by_id(&self, id: UserId) -> Result<bool, UsersServiceError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, UsersServiceError>;
    async fn create(&self, user: &User) -> Result<(), UsersServiceError>;
    /// Overwrite every mutable column of an existing user (last write wins).
    async fn update(&self, user: &User) -> Result<(), UsersServiceError>;
    async fn count_by_status(&self, status: UserStatus) -> Result<u64, UsersServiceError>;
}

/// Port for querying the orders service.
pub trait OrderPort: Send + Sync {
    /// Fetch every order belonging to `user_id`, in the order the orders
    /// service returns them. Any failure maps to `OrderServiceUnavailable`.
    async fn fetch_orders_for_user(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
    ) -> Result<Vec<RemoteOrder>, UsersServiceError>;
}
