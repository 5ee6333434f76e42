// apps/orders_app/src/web/routes.rs

use actix_web::error::JsonPayloadError;
use actix_web::web;

use crate::errors::AppError;

/// Body-extraction failures (malformed JSON, wrong content type, a missing or
/// non-numeric `amount`) become `AppError::Validation`, i.e. a 400.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| {
    let message = match &err {
      JsonPayloadError::Deserialize(e) => e.to_string(),
      other => other.to_string(),
    };
    tracing::warn!(error = %message, "Rejected request body");
    AppError::Validation(message).into()
  })
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .route(
      "/health",
      web::get().to(crate::web::handlers::health_handlers::health_check_handler),
    )
    .route(
      "/orders",
      web::post().to(crate::web::handlers::order_handlers::create_order_handler),
    );
}
