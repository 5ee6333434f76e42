// apps/orders_app/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use order_intake::OrderRequest;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

/// `POST /orders`: 201 with an empty body once the intake accepts the order.
///
/// `amount` has already been coerced by the JSON extractor; a body that fails
/// coercion never reaches this handler.
#[instrument(
    name = "handler::create_order",
    skip(app_state, body),
    fields(amount = %body.amount)
)]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
  info!("Creating an order with amount {}", body.amount);

  let outcome = app_state.intake.create_order(body.into_inner()).await?;

  if outcome.is_persisted() {
    info!(order_id = %outcome.order_id, "Order accepted.");
  } else {
    warn!(
      order_id = %outcome.order_id,
      policy = %app_state.config.failure_policy,
      "Order accepted but not persisted."
    );
  }

  Ok(HttpResponse::Created().finish())
}
