use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use tandem_domain::id::{OrderId, UserId};
use tandem_domain::order::OrderStatus;
use tandem_domain::user::UserStatus;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 255;

/// User record owned by the users service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An order as reported by the orders service. Never stored here; relayed
/// to the caller as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOrder {
    pub id: OrderId,
    pub user_id: UserId,
    pub product_name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Non-blank, at most [`MAX_NAME_LEN`] characters.
pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty() && name.chars().count() <= MAX_NAME_LEN
}

/// Loose shape check: one `@` with a non-empty local part and a dotted domain.
pub fn validate_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN || email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
