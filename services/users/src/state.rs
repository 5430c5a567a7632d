use sea_orm::DatabaseConnection;

use crate::infra::db::DbUserRepository;
use crate::infra::orders::HttpOrderClient;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Pooled client reused for every call to the orders service.
    pub http: reqwest::Client,
    pub orders_base_url: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn order_port(&self) -> HttpOrderClient {
        HttpOrderClient::new(self.http.clone(), &self.orders_base_url)
    }
}
