use sea_orm::DatabaseConnection;

use crate::infra::db::DbOrderRepository;
use crate::infra::users::HttpUserClient;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Pooled client reused for every call to the users service.
    pub http: reqwest::Client,
    pub users_base_url: String,
}

impl AppState {
    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_port(&self) -> HttpUserClient {
        HttpUserClient::new(self.http.clone(), &self.users_base_url)
    }
}
