use sea_orm::{Database, DatabaseConnection};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Open a database handle and issue a single liveness probe against it.
///
/// `Database::connect` validates the descriptor and establishes the handle;
/// `ping` confirms the server actually answers. Both failures are fatal to
/// the caller, with no retry. The probe runs exactly once per process.
///
/// # Errors
///
/// Returns `AppError::ConnectionSetup` if the handle cannot be opened, or
/// `AppError::Probe` if the liveness check fails.
pub async fn connect_and_probe(config: &Config) -> AppResult<DatabaseConnection> {
    let url = config.connection_url();

    tracing::info!(host = %config.db_host, database = %config.db_name, "Connecting to database...");
    let db = Database::connect(&url)
        .await
        .map_err(AppError::ConnectionSetup)?;

    db.ping().await.map_err(AppError::Probe)?;
    tracing::info!("Database connection established");

    Ok(db)
}
