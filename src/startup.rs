use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

/// Timeout for attachment downloads.
const DOWNLOAD_TIMEOUT_SECS: u64 = 30;

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` and falls back to `info` when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database holding the host bot's tables.
///
/// Applies the bundled migrations only when `RUN_MIGRATIONS` is enabled, since the
/// tables are normally created and owned by the host bot.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database
/// - `Err(AppError::DbErr)` - Failed to connect or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if config.run_migrations {
        tracing::info!("Applying database migrations");
        Migrator::up(&db, None).await?;
    }

    Ok(db)
}

/// Builds the HTTP client used to download broadcast attachments.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .build()?;

    Ok(client)
}
