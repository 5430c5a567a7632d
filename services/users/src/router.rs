use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use tandem_core::health::{healthz, readiness};
use tandem_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::user::{
    count_active_users, create_user, delete_user, get_user, get_user_by_email, get_user_orders,
    list_users, update_user,
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
        // Users
        .route("/users", get(list_users))
        .route("/users", post(create_user))
        .route("/users/count/active", get(count_active_users))
        .route("/users/email/{email}", get(get_user_by_email))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        // Cross-service view
        .route("/users/{id}/orders", get(get_user_orders))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
