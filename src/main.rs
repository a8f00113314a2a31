mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod util;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    tracing::info!("Loading broadcast bot v{}", env!("CARGO_PKG_VERSION"));

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    bot::start::start_bot(&config, db, http_client).await
}
