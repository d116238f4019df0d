mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, data::SeaOrmRepository, error::AppError, link::LinkGenerator, router,
    startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let state = AppState::new(
        Arc::new(SeaOrmRepository::new(db)),
        LinkGenerator::new(config.app_url.clone()),
    );

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router::app(state))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
