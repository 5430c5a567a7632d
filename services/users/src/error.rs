use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tandem_core::error::error_response;

/// Users service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum UsersServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("email already exists")]
    EmailAlreadyExists,
    #[error("invalid {0}")]
    Validation(&'static str),
    /// The user exists locally but the orders service could not be queried.
    #[error("order service unavailable")]
    OrderServiceUnavailable,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl UsersServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::OrderServiceUnavailable => "ORDER_SERVICE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::EmailAlreadyExists => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::OrderServiceUnavailable => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UsersServiceError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        error_response(self.status(), self.kind(), self.to_string())
    }
}
