use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tandem_core::middleware::RequestContext;
use tandem_domain::id::{OrderId, UserId};
use tandem_domain::order::OrderStatus;
use tandem_domain::user::UserStatus;

use crate::domain::types::{RemoteOrder, User};
use crate::error::UsersServiceError;
use crate::state::AppState;
use crate::usecase::user::{
    CountActiveUsersUseCase, CreateUserInput, CreateUserUseCase, DeleteUserUseCase,
    GetUserByEmailUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserInput, UpdateUserUseCase,
};
use crate::usecase::user_orders::GetUserOrdersUseCase;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    #[serde(serialize_with = "tandem_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "tandem_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            status: user.status,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

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

impl From<RemoteOrder> for OrderResponse {
    fn from(order: RemoteOrder) -> Self {
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

// ── Request types ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UserRequest {
    pub name: String,
    pub email: String,
    pub status: Option<UserStatus>,
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, UsersServiceError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<UserResponse>, UsersServiceError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(&ctx, user_id).await?;
    Ok(Json(user.into()))
}

// ── GET /users/email/{email} ─────────────────────────────────────────────────

pub async fn get_user_by_email(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserResponse>, UsersServiceError> {
    let usecase = GetUserByEmailUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(&ctx, &email).await?;
    Ok(Json(user.into()))
}

// ── POST /users ──────────────────────────────────────────────────────────────

pub async fn create_user(
    ctx: RequestContext,
    State(state): State<AppState>,
    Json(body): Json<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), UsersServiceError> {
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(
            &ctx,
            CreateUserInput {
                name: body.name,
                email: body.email,
                status: body.status,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── PUT /users/{id} ──────────────────────────────────────────────────────────

pub async fn update_user(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Json(body): Json<UserRequest>,
) -> Result<Json<UserResponse>, UsersServiceError> {
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(
            &ctx,
            user_id,
            UpdateUserInput {
                name: body.name,
                email: body.email,
                status: body.status,
            },
        )
        .await?;
    Ok(Json(user.into()))
}

// ── DELETE /users/{id} ───────────────────────────────────────────────────────

pub async fn delete_user(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<StatusCode, UsersServiceError> {
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(&ctx, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /users/count/active ──────────────────────────────────────────────────

pub async fn count_active_users(
    State(state): State<AppState>,
) -> Result<Json<u64>, UsersServiceError> {
    let usecase = CountActiveUsersUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── GET /users/{id}/orders ───────────────────────────────────────────────────

pub async fn get_user_orders(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<OrderResponse>>, UsersServiceError> {
    let usecase = GetUserOrdersUseCase {
        users: state.user_repo(),
        orders: state.order_port(),
    };
    let orders = usecase.execute(&ctx, user_id).await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
