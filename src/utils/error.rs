use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Request failed")]
    HttpError(#[from] reqwest::Error),
}

impl CheckoutError {
    pub fn code(&self) -> &'static str {
        match self {
            CheckoutError::ValidationError(_) => "VALIDATION_ERROR",
            CheckoutError::InvalidAmount(_) => "INVALID_AMOUNT",
            CheckoutError::NotFound(_) => "NOT_FOUND",
            CheckoutError::ApiError { .. } => "API_ERROR",
            CheckoutError::HttpError(_) => "HTTP_ERROR",
        }
    }

    pub fn log(&self) {
        match self {
            CheckoutError::ValidationError(msg)
            | CheckoutError::InvalidAmount(msg)
            | CheckoutError::NotFound(msg) => {
                error!(error = ?self, message = %msg, "Checkout error");
            }
            CheckoutError::ApiError { status, message } => {
                error!(status = %status, message = %message, "API error");
            }
            CheckoutError::HttpError(e) => {
                error!(error = ?e, "HTTP request error");
            }
        }
    }

    /// Message safe to show to the end user; transport details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::ValidationError(msg)
            | CheckoutError::InvalidAmount(msg)
            | CheckoutError::NotFound(msg) => msg.clone(),
            CheckoutError::ApiError { message, .. } => message.clone(),
            CheckoutError::HttpError(_) => "An unexpected error occurred".to_string(),
        }
    }
}
