use std::process;

use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod config;
mod db;
mod state;
mod types;
mod utils;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let file_appender = tracing_appender::rolling::daily("logs", "voidbin.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .with(fmt::layer().json().with_ansi(false).with_writer(non_blocking))
        .init();

    let config = Config::load();

    let pg_db = match PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url())
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Could not connect to the database.");
            process::exit(1);
        }
    };

    if let Err(e) = sqlx::migrate!("./migrations").run(&pg_db).await {
        tracing::error!(error = %e, "Failed to apply database migrations");
        process::exit(1);
    }
    tracing::info!("Finished applying migrations");

    let redis_client = match redis::Client::open(config.redis_url()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Invalid redis URL");
            process::exit(1);
        }
    };
    let redis_db = match r2d2::Pool::builder().build(redis_client) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Could not connect to redis.");
            process::exit(1);
        }
    };

    if let Err(e) = tokio::fs::create_dir_all(&config.uploader.directory).await {
        tracing::error!(
            error = %e,
            directory = %config.uploader.directory,
            "Could not create upload directory"
        );
        process::exit(1);
    }

    let server_addr = config.server_addr();
    let state = AppState::new(pg_db, redis_db, config);
    let app = api::routes::router(state);

    let listener = match tokio::net::TcpListener::bind(&server_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, addr = %server_addr, "Failed to bind listener");
            process::exit(1);
        }
    };
    tracing::info!(addr = %server_addr, "Listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
        process::exit(1);
    }
}
