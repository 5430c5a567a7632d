use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tandem_core::middleware::RequestContext;
use tandem_domain::id::{OrderId, UserId};
use tandem_domain::order::OrderStatus;

use crate::domain::types::{Order, OrderDraft, TransitionMode};
use crate::error::OrdersServiceError;
use crate::state::AppState;
use crate::usecase::aggregation::{
    CountOrdersByStatusUseCase, CountOrdersByUserUseCase, TotalAmountByUserUseCase,
};
use crate::usecase::lifecycle::{CancelOrderUseCase, UpdateOrderStatusUseCase};
use crate::usecase::order::{
    CreateOrderUseCase, GetOrderUseCase, ListOrdersForUserUseCase, ListOrdersUseCase,
    UpdateOrderUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: OrderId,
    pub user_id: UserId,
    pub product_name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub status: OrderStatus,
    #[serde(serialize_with = "tandem_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "tandem_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            product_name: order.product_name,
            quantity: order.quantity,
            price: order.price,
            status: order.status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

fn to_responses(orders: Vec<Order>) -> Json<Vec<OrderResponse>> {
    Json(orders.into_iter().map(OrderResponse::from).collect())
}

// ── Request types ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub user_id: UserId,
    pub product_name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub status: Option<OrderStatus>,
}

impl From<OrderRequest> for OrderDraft {
    fn from(body: OrderRequest) -> Self {
        Self {
            user_id: body.user_id,
            product_name: body.product_name,
            quantity: body.quantity,
            price: body.price,
            status: body.status,
        }
    }
}

#[derive(Deserialize)]
pub struct StatusQuery {
    pub status: OrderStatus,
    #[serde(default)]
    pub force: bool,
}

// ── GET /orders ──────────────────────────────────────────────────────────────

pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, OrdersServiceError> {
    let usecase = ListOrdersUseCase {
        repo: state.order_repo(),
    };
    Ok(to_responses(usecase.execute().await?))
}

// ── GET /orders/{id} ─────────────────────────────────────────────────────────

pub async fn get_order(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
) -> Result<Json<OrderResponse>, OrdersServiceError> {
    let usecase = GetOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(&ctx, order_id).await?;
    Ok(Json(order.into()))
}

// ── GET /orders/user/{userId} ────────────────────────────────────────────────

pub async fn list_orders_for_user(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<OrderResponse>>, OrdersServiceError> {
    let usecase = ListOrdersForUserUseCase {
        repo: state.order_repo(),
        users: state.user_port(),
    };
    Ok(to_responses(usecase.execute(&ctx, user_id).await?))
}

// ── POST /orders ─────────────────────────────────────────────────────────────

pub async fn create_order(
    ctx: RequestContext,
    State(state): State<AppState>,
    Json(body): Json<OrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), OrdersServiceError> {
    let usecase = CreateOrderUseCase {
        repo: state.order_repo(),
        users: state.user_port(),
    };
    let order = usecase.execute(&ctx, body.into()).await?;
    Ok((StatusCode::CREATED, Json(order.into())))
}

// ── PUT /orders/{id} ─────────────────────────────────────────────────────────

pub async fn update_order(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
    Json(body): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, OrdersServiceError> {
    let usecase = UpdateOrderUseCase {
        repo: state.order_repo(),
        users: state.user_port(),
    };
    let order = usecase.execute(&ctx, order_id, body.into()).await?;
    Ok(Json(order.into()))
}

// ── PATCH /orders/{id}/status ────────────────────────────────────────────────

pub async fn update_order_status(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<OrderResponse>, OrdersServiceError> {
    let mode = if query.force {
        TransitionMode::Forced
    } else {
        TransitionMode::Checked
    };
    let usecase = UpdateOrderStatusUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(&ctx, order_id, query.status, mode).await?;
    Ok(Json(order.into()))
}

// ── DELETE /orders/{id} ──────────────────────────────────────────────────────

pub async fn delete_order(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
) -> Result<StatusCode, OrdersServiceError> {
    let usecase = CancelOrderUseCase {
        repo: state.order_repo(),
    };
    usecase.execute(&ctx, order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /orders/count/status/{status} ────────────────────────────────────────

pub async fn count_orders_by_status(
    State(state): State<AppState>,
    Path(raw_status): Path<String>,
) -> Result<Json<u64>, OrdersServiceError> {
    let status = raw_status
        .parse::<OrderStatus>()
        .map_err(|_| OrdersServiceError::Validation("status"))?;
    let usecase = CountOrdersByStatusUseCase {
        repo: state.order_repo(),
    };
    Ok(Json(usecase.execute(status).await?))
}

// ── GET /orders/count/user/{userId} ──────────────────────────────────────────

pub async fn count_orders_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<u64>, OrdersServiceError> {
    let usecase = CountOrdersByUserUseCase {
        repo: state.order_repo(),
    };
    Ok(Json(usecase.execute(user_id).await?))
}

// ── GET /orders/total/user/{userId} ──────────────────────────────────────────

pub async fn total_amount_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Decimal>, OrdersServiceError> {
    let usecase = TotalAmountByUserUseCase {
        repo: state.order_repo(),
    };
    Ok(Json(usecase.execute(user_id).await?))
}
