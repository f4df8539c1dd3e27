//! The HTTP-facing error taxonomy.
//!
//! Every failure renders as `{"message": "..."}`. Stock and seller conflicts are reported as
//! `400 Bad Request`, like validation failures.

use crate::address_actor::AddressError;
use crate::auth::AuthError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::review_actor::ReviewError;
use crate::user_actor::UserError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Internal(detail) => {
                error!(%detail, "Request failed");
                "Internal server error"
            }
            ApiError::Validation(m)
            | ApiError::NotFound(m)
            | ApiError::Forbidden(m)
            | ApiError::Unauthenticated(m)
            | ApiError::Conflict(m) => m.as_str(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { message })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        let message = e.to_string();
        match e {
            ProductError::NotFound(_) | ProductError::Unavailable(_) => ApiError::NotFound(message),
            ProductError::InsufficientStock { .. } => ApiError::Conflict(message),
            ProductError::InvalidQuantity(_) | ProductError::ValidationError(_) => {
                ApiError::Validation(message)
            }
            ProductError::NotOwner(_) => ApiError::Forbidden(message),
            ProductError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        let message = e.to_string();
        match e {
            UserError::NotFound(_)
            | UserError::ProductUnavailable(_)
            | UserError::CartItemNotFound(_) => ApiError::NotFound(message),
            UserError::AlreadyExists | UserError::ValidationError(_) => {
                ApiError::Validation(message)
            }
            UserError::InvalidCredentials => ApiError::Unauthenticated(message),
            UserError::InsufficientStock(_) | UserError::MixedSellerCart => {
                ApiError::Conflict(message)
            }
            UserError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        let message = e.to_string();
        match e {
            OrderError::NotFound(_) | OrderError::ProductUnavailable(_) => {
                ApiError::NotFound(message)
            }
            OrderError::EmptyOrder
            | OrderError::EmptyCart
            | OrderError::ValidationError(_)
            | OrderError::InvalidStatus(_)
            | OrderError::SellerStatusNotAllowed(_) => ApiError::Validation(message),
            OrderError::InsufficientStock(_)
            | OrderError::MixedSeller
            | OrderError::InvalidTransition { .. } => ApiError::Conflict(message),
            OrderError::NotOwner => ApiError::Forbidden(message),
            OrderError::Cart(inner) => ApiError::from(inner),
            OrderError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<AddressError> for ApiError {
    fn from(e: AddressError) -> Self {
        let message = e.to_string();
        match e {
            AddressError::NotFound(_) => ApiError::NotFound(message),
            AddressError::ValidationError(_) => ApiError::Validation(message),
            AddressError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<ReviewError> for ApiError {
    fn from(e: ReviewError) -> Self {
        let message = e.to_string();
        match e {
            ReviewError::NotFound(_) | ReviewError::ProductNotFound(_) => {
                ApiError::NotFound(message)
            }
            ReviewError::ValidationError(_) => ApiError::Validation(message),
            ReviewError::NotAuthor => ApiError::Forbidden(message),
            ReviewError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        ApiError::Unauthenticated(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderStatus, ProductId};

    #[test]
    fn taxonomy_maps_to_status_codes() {
        let cases = [
            (ApiError::from(OrderError::MixedSeller), StatusCode::BAD_REQUEST),
            (ApiError::from(OrderError::NotOwner), StatusCode::FORBIDDEN),
            (
                ApiError::from(OrderError::ProductUnavailable("product_1".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(OrderError::InvalidTransition {
                    from: OrderStatus::Delivered,
                    to: OrderStatus::Shipped,
                }),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(UserError::InvalidCredentials),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::from(ProductError::NotOwner(ProductId(2))),
                StatusCode::FORBIDDEN,
            ),
            (ApiError::from(AuthError::Expired), StatusCode::UNAUTHORIZED),
            (ApiError::from(ReviewError::NotAuthor), StatusCode::FORBIDDEN),
            (
                ApiError::from(ReviewError::ProductNotFound(ProductId(3))),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(OrderError::Cart(UserError::NotFound("user_9".into()))),
                StatusCode::NOT_FOUND,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.status_code(), status, "{error:?}");
        }
    }

    #[actix_web::test]
    async fn internal_details_stay_out_of_the_body() {
        let response = ApiError::Internal("channel closed".into()).error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        assert_eq!(body, r#"{"message":"Internal server error"}"#);
    }
}
