use actix_web::{App, HttpServer, web};
use anyhow::anyhow;
use tracing::info;

use next_t::api::{interactive_handler, slash_handler};
use next_t::core::config::AppConfig;
use next_t::core::context::AppContext;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    next_t::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow!("Config error: {}", e))?;
    let port = config.port;
    let ctx = AppContext::new(config);

    info!("Starting next-t on port {}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(ctx.clone()))
            .service(slash_handler::slash_command)
            .service(interactive_handler::interaction)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await?;

    Ok(())
}
