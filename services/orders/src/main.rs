use sea_orm::Database;
use tracing::info;

use tandem_orders::config::OrdersConfig;
use tandem_orders::router::build_router;
use tandem_orders::state::AppState;

#[tokio::main]
async fn main() {
    tandem_core::tracing::init_tracing();

    let config = OrdersConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        http: reqwest::Client::new(),
        users_base_url: config.users_base_url.clone(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.orders_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(users_base_url = %config.users_base_url, "orders service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
