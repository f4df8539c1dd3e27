use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use marketplace::auth::TokenSigner;
use marketplace::config::ServerConfig;
use marketplace::http::{self, AppState};
use marketplace::lifecycle::MarketplaceSystem;
use resource_actor::tracing::setup_tracing;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => e.exit(),
    };
    setup_tracing(&config.log_filter, config.log_format.into());

    let system = MarketplaceSystem::new(config.channel_capacity);

    if let Some((email, password)) = config.admin_credentials() {
        if let Err(e) = system
            .user_client
            .ensure_admin(&config.admin_name, email, &config.admin_phone, password)
            .await
        {
            error!(error = %e, "Admin bootstrap failed");
        }
    }

    let state = AppState {
        users: system.user_client.clone(),
        products: system.product_client.clone(),
        orders: system.order_client.clone(),
        addresses: system.address_client.clone(),
        reviews: system.review_client.clone(),
        tokens: TokenSigner::new(&config.token_secret, config.token_ttl()),
    };

    let addr = config.socket_addr();
    info!(%addr, "Starting HTTP server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(http::routes)
    })
    .bind(&addr)?
    .run()
    .await?;

    system
        .shutdown()
        .await
        .map_err(std::io::Error::other)
}
