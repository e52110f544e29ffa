use actix_web::{middleware::Logger, web, App, HttpServer};
use macim_server::{db, http};
use std::env;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Configuration
    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://macim.db".into());
    let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into());

    // SQLite pool + schema bootstrap
    let db_pool = db::connect(&database_url).await?;
    log::info!("MAÇIM API listening on {server_addr} ({database_url})");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(db_pool.clone()))
            .configure(http::routes::init_routes)
            .default_service(web::route().to(http::not_found))
    })
    .bind(&server_addr)?
    .run()
    .await?;

    Ok(())
}
