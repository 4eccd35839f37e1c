//! Booking Directory Server - Main entry point

use anyhow::Result;
use booking_common::logging::{init_logging, LogConfig};
use std::{future::IntoFuture, net::SocketAddr, sync::Arc};
use tracing::{info, warn};

use booking_server::{
    api,
    config::Config,
    db::{self, DbConfig},
    shutdown,
    store::{PgStore, SharedStore},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Environment variables take precedence over these defaults
    let log_config = LogConfig::builder()
        .log_file_prefix("booking-server")
        .filter_directives("booking_server=debug,tower_http=debug,sqlx=warn")
        .build()
        .merge_env()?;

    let _log_guard = init_logging(&log_config)?;

    info!("Starting Booking Directory Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    let pool = db::create_pool(&DbConfig::from(&config.database)).await?;
    info!("Database connection pool established");

    db::migrate(&pool).await?;
    info!("Database migrations completed");

    let store: SharedStore = Arc::new(PgStore::new(pool));
    let app = api::create_router(store, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let (trigger, deadline) =
        shutdown::drain_deadline(shutdown::shutdown_signal(), config.server.shutdown_timeout());
    let server = axum::serve(listener, app).with_graceful_shutdown(trigger);

    tokio::select! {
        result = server.into_future() => {
            result?;
            info!("Server shut down gracefully");
        },
        () = deadline => {
            warn!(
                timeout_secs = config.server.shutdown_timeout_secs,
                "Shutdown timeout elapsed, dropping remaining connections"
            );
        },
    }

    Ok(())
}
