use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use tandem_domain::id::{OrderId, UserId};
use tandem_domain::order::OrderStatus;
use tandem_domain::user::UserStatus;

use crate::error::OrdersServiceError;

pub const MAX_PRODUCT_NAME_LEN: usize = 100;
/// Prices are stored as NUMERIC(19, 2).
pub const PRICE_SCALE: u32 = 2;
/// Exclusive upper bound: NUMERIC(19, 2) leaves 17 integer digits.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_569_325_056, 23_283_064, 0, false, 0);

/// Order record owned by the orders service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub product_name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// How a status change is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionMode {
    /// Only transitions allowed by [`OrderStatus::can_transition_to`].
    #[default]
    Checked,
    /// Unconditional overwrite (operator override).
    Forced,
}

impl Order {
    /// `price × quantity`, exact.
    pub fn amount(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Move to `next`, stamping `updated_at`. Leaves the order untouched on error.
    pub fn transition_to(
        &mut self,
        next: OrderStatus,
        mode: TransitionMode,
        now: DateTime<Utc>,
    ) -> Result<(), OrdersServiceError> {
        if mode == TransitionMode::Checked && !self.status.can_transition_to(next) {
            return Err(OrdersServiceError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.updated_at = now;
        Ok(())
    }

    /// Soft delete: always lands on `Cancelled`, whatever the current status.
    pub fn cancel(&mut self, now: DateTime<Utc>) {
        self.status = OrderStatus::Cancelled;
        self.updated_at = now;
    }
}

/// Minimal projection of a user returned by the users service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUser {
    pub id: UserId,
    pub name: String,
    pub status: UserStatus,
}

/// Client-supplied order fields shared by create and full update.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub user_id: UserId,
    pub product_name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub status: Option<OrderStatus>,
}

impl OrderDraft {
    pub fn validate(&self) -> Result<(), OrdersServiceError> {
        let name_len = self.product_name.chars().count();
        if self.product_name.trim().is_empty() || name_len > MAX_PRODUCT_NAME_LEN {
            return Err(OrdersServiceError::Validation("productName"));
        }
        if self.quantity < 1 {
            return Err(OrdersServiceError::Validation("quantity"));
        }
        if self.price <= Decimal::ZERO
            || self.price >= MAX_PRICE
            || self.price.normalize().scale() > PRICE_SCALE
        {
            return Err(OrdersServiceError::Validation("price"));
        }
        Ok(())
    }
}
