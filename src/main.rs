use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dbprobe::config::{self, Config};
use dbprobe::db;
use dbprobe::error::AppResult;
use dbprobe::routes;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dbprobe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    tracing::info!("Starting dbprobe...");

    // Read connection parameters from the environment
    let config = Config::from_env();

    // Connect and probe (fail-fast, no retry)
    let _db = db::connect_and_probe(&config).await?;

    // Serve the confirmation route for the rest of the process lifetime
    let app = routes::build_router();
    tracing::info!(address = %config::LISTEN_ADDR, "Starting server");
    let listener = TcpListener::bind(config::LISTEN_ADDR).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
