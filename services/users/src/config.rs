use tandem_core::config;

/// Users service configuration loaded from environment variables.
#[derive(Debug)]
pub struct UsersConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8081). Env var: `USERS_PORT`.
    pub users_port: u16,
    /// Base URL of the orders service (default "http://localhost:8082").
    /// Env var: `ORDERS_BASE_URL`.
    pub orders_base_url: String,
}

impl UsersConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: config::required("DATABASE_URL"),
            users_port: config::parsed_or("USERS_PORT", 8081),
            orders_base_url: config::base_url(&config::string_or(
                "ORDERS_BASE_URL",
                "http://localhost:8082",
            )),
        }
    }
}
