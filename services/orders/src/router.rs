use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, patch},
};
use tower_http::trace::TraceLayer;

use tandem_core::health::{healthz, readiness};
use tandem_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::order::{
    count_orders_by_status, count_orders_by_user, create_order, delete_order, get_order,
    list_orders, list_orders_for_user, total_amount_by_user, update_order, update_order_status,
};
use crate::state::AppState;

async fn readyz(State(state): State<AppState>) -> StatusCode {
    readiness(state.db.ping().await)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Orders
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/orders/{id}/status", patch(update_order_status))
        .route("/orders/user/{user_id}", get(list_orders_for_user))
        // Aggregations
        .route("/orders/count/status/{status}", get(count_orders_by_status))
        .route("/orders/count/user/{user_id}", get(count_orders_by_user))
        .route("/orders/total/user/{user_id}", get(total_amount_by_user))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
