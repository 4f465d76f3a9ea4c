use anyhow::{Context, Result};
use dotenvy::dotenv;
use employee_api::{config::Config, create_app, AppState};
use shared::telemetry::{self, TelemetryConfig};
use shared::DatabasePool;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let telemetry_config = TelemetryConfig::from_env("employee-api");
    telemetry::init_telemetry(telemetry_config)?;

    let config = Config::from_env()?;
    info!("Starting Employee API on {}", config.listen_addr());

    let db_pool = DatabasePool::from_config(&config.database)
        .await
        .context("Failed to connect to database")?;
    db_pool
        .run_migrations()
        .await
        .context("Failed to run database migrations")?;

    let app = create_app(AppState::from_pool(&db_pool));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Employee API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await;
    info!("Database pool closed, exiting");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
