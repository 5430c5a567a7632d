use anyhow::Context as _;
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use tandem_domain::id::{OrderId, UserId};
use tandem_domain::order::OrderStatus;
use tandem_orders_schema::orders;

use crate::domain::repository::OrderRepository;
use crate::domain::types::Order;
use crate::error::OrdersServiceError;

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let models = orders::Entity::find()
            .order_by_asc(orders::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list orders")?;
        models.into_iter().map(order_from_model).collect()
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrdersServiceError> {
        let model = orders::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find order by id")?;
        model.map(order_from_model).transpose()
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Order>, OrdersServiceError> {
        let models = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id.0))
            .order_by_asc(orders::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list orders by user")?;
        models.into_iter().map(order_from_model).collect()
    }

    async fn create(&self, order: &Order) -> Result<(), OrdersServiceError> {
        orders::ActiveModel {
            id: Set(order.id.0),
            user_id: Set(order.user_id.0),
            product_name: Set(order.product_name.clone()),
            quantity: Set(order.quantity),
            price: Set(order.price),
            status: Set(order.status.as_str().to_owned()),
            created_at: Set(order.created_at),
            updated_at: Set(order.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create order")?;
        Ok(())
    }

    async fn update(&self, order: &Order) -> Result<(), OrdersServiceError> {
        orders::ActiveModel {
            id: Set(order.id.0),
            user_id: Set(order.user_id.0),
            product_name: Set(order.product_name.clone()),
            quantity: Set(order.quantity),
            price: Set(order.price),
            status: Set(order.status.as_str().to_owned()),
            updated_at: Set(order.updated_at),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update order")?;
        Ok(())
    }

    async fn count_by_status(&self, status: OrderStatus) -> Result<u64, OrdersServiceError> {
        let count = orders::Entity::find()
            .filter(orders::Column::Status.eq(status.as_str()))
            .count(&self.db)
            .await
            .context("count orders by status")?;
        Ok(count)
    }

    async fn count_by_user(&self, user_id: UserId) -> Result<u64, OrdersServiceError> {
        let count = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id.0))
            .count(&self.db)
            .await
            .context("count orders by user")?;
        Ok(count)
    }

    async fn total_amount_by_user(&self, user_id: UserId) -> Result<Decimal, OrdersServiceError> {
        let amount = Expr::col(orders::Column::Price).mul(Expr::col(orders::Column::Quantity));
        // SUM over zero rows is NULL.
        let total: Option<Option<Decimal>> = orders::Entity::find()
            .select_only()
            .column_as(SimpleExpr::FunctionCall(Func::sum(amount)), "total")
            .filter(orders::Column::UserId.eq(user_id.0))
            .filter(orders::Column::Status.ne(OrderStatus::Cancelled.as_str()))
            .into_tuple()
            .one(&self.db)
            .await
            .context("sum order amounts by user")?;
        Ok(total.flatten().unwrap_or(Decimal::ZERO))
    }
}

fn order_from_model(model: orders::Model) -> Result<Order, OrdersServiceError> {
    let status = model
        .status
        .parse::<OrderStatus>()
        .with_context(|| format!("order {} has unknown status", model.id))?;
    Ok(Order {
        id: model.id.into(),
        user_id: model.user_id.into(),
        product_name: model.product_name,
        quantity: model.quantity,
        price: model.price,
        status,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
