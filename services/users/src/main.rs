use sea_orm::Database;
use tracing::info;

use tandem_users::config::UsersConfig;
use tandem_users::router::build_router;
use tandem_users::state::AppState;

#[tokio::main]
async fn main() {
    tandem_core::tracing::init_tracing();

    let config = UsersConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        http: reqwest::Client::new(),
        orders_base_url: config.orders_base_url.clone(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.users_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(orders_base_url = %config.orders_base_url, "users service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
