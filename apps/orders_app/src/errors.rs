// apps/orders_app/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use order_intake::IntakeError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Order Intake Error: {source}")]
  Intake {
    #[from] // Allows conversion from order_intake::IntakeError
    source: IntakeError,
  },
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"})),
      AppError::Intake { source } => match source {
        IntakeError::Persistence { order_id, .. } => {
          // The backend cause stays in the logs.
          tracing::error!(intake_error_source = ?source, %order_id, "Order persistence failed");
          HttpResponse::InternalServerError().json(json!({"error": "Order could not be saved"}))
        }
        other => {
          tracing::error!(intake_error_source = ?other, "Order intake error details");
          HttpResponse::InternalServerError()
            .json(json!({"error": "Order intake failed", "detail": other.to_string()}))
        }
      },
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
