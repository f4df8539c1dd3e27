//! # HTTP Surface
//!
//! The actix-web application: JSON in, JSON out, bearer-token authentication through the
//! [`Caller`](crate::auth::Caller) extractor, and one error type, [`ApiError`], rendered as
//! `{"message": ...}`.
//!
//! ```rust,ignore
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(web::Data::new(state.clone()))
//!         .configure(http::routes)
//! })
//! ```

pub mod error;
pub mod handlers;
pub mod state;
pub mod views;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use actix_web::{get, web, HttpResponse};
use serde_json::json;

#[get("/health")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Registers every route plus extractor configs that report malformed input as `400`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .service(health)
    .configure(handlers::users::configure)
    .configure(handlers::sellers::configure)
    .configure(handlers::addresses::configure)
    .configure(handlers::products::configure)
    .configure(handlers::cart::configure)
    .configure(handlers::orders::configure)
    .configure(handlers::reviews::configure)
    .configure(handlers::admin::configure);
}
