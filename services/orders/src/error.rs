use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tandem_core::error::error_response;
use tandem_domain::order::OrderStatus;

/// Orders service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    OrderNotFound,
    /// The users service answered that the referenced user does not exist.
    #[error("user not found")]
    UserNotFound,
    /// The users service could not be reached or gave an unusable answer.
    #[error("user service unavailable")]
    UserServiceUnavailable,
    #[error("invalid {0}")]
    Validation(&'static str),
    #[error("cannot change order status from {from} to {to}")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl OrdersServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserServiceUnavailable => "USER_SERVICE_UNAVAILABLE",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::OrderNotFound | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::UserServiceUnavailable => StatusCode::BAD_GATEWAY,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidStatusTransition { .. } => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for OrdersServiceError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        error_response(self.status(), self.kind(), self.to_string())
    }
}
