//! Error handling for the application

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    InvalidRequest(#[from] JsonRejection),

    #[error(transparent)]
    Pricing(PricingError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PricingError> for AppError {
    fn from(error: PricingError) -> Self {
        match error {
            PricingError::Overflow { .. } => AppError::Internal(error.to_string()),
            other => AppError::Pricing(other),
        }
    }
}

/// JSON body extractor whose rejections use the API error format.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Structured context for the client, where the error has any.
fn pricing_error_details(error: &PricingError) -> Option<serde_json::Value> {
    match error {
        PricingError::NegativeAmount { field, amount } => Some(serde_json::json!({
            "field": field,
            "amount": amount.to_string(),
        })),
        PricingError::NegativeQuantity { quantity } => {
            Some(serde_json::json!({ "quantity": quantity }))
        }
        PricingError::InvalidStay {
            check_in,
            check_out,
        } => Some(serde_json::json!({
            "check_in": check_in.to_string(),
            "check_out": check_out.to_string(),
        })),
        _ => None,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                PricingErrorResponse {
                    error_type: "not_found".to_string(),
                    message: self.to_string(),
                    details: None,
                },
            ),
            AppError::InvalidRequest(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                (
                    StatusCode::BAD_REQUEST,
                    PricingErrorResponse {
                        error_type: "invalid_request".to_string(),
                        message: rejection.body_text(),
                        details: None,
                    },
                )
            }
            AppError::Pricing(e) => {
                tracing::warn!("Rejected pricing request: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    PricingErrorResponse {
                        error_type: e.error_type().to_string(),
                        message: e.to_string(),
                        details: pricing_error_details(e),
                    },
                )
            }
            AppError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PricingErrorResponse {
                        error_type: "internal_error".to_string(),
                        message: "Internal server error".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
