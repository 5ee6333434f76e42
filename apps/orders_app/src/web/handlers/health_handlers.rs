// apps/orders_app/src/web/handlers/health_handlers.rs

use actix_web::HttpResponse;

// Liveness only: never touches the store or the dispatcher.
pub async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("OK")
}
