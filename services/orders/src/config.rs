use tandem_core::config;

/// Orders service configuration loaded from environment variables.
#[derive(Debug)]
pub struct OrdersConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8082). Env var: `ORDERS_PORT`.
    pub orders_port: u16,
    /// Base URL of the users service (default "http://localhost:8081").
    /// Env var: `USERS_BASE_URL`.
    pub users_base_url: String,
}

impl OrdersConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: config::required("DATABASE_URL"),
            orders_port: config::parsed_or("ORDERS_PORT", 8082),
            users_base_url: config::base_url(&config::string_or(
                "USERS_BASE_URL",
                "http://localhost:8081",
            )),
        }
    }
}
