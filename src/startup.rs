use dioxus_logger::tracing::{self, Level};

use crate::{error::AppError, router};

/// Initializes the global tracing subscriber.
///
/// The level is read from `LOG_LEVEL` (`trace`, `debug`, `info`, `warn`, `error`)
/// and defaults to `info`. Runs before configuration is loaded so configuration
/// errors are logged too.
pub fn init_logging() -> Result<(), AppError> {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    dioxus_logger::init(level)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logging: {}", e)))
}

/// Serves the liveness endpoint on all interfaces until the process exits.
///
/// # Arguments
/// - `port` - Port to listen on
///
/// # Returns
/// - `Err(AppError::IoErr)` - Failed to bind the port or the server stopped
pub async fn serve_liveness(port: u16) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("Liveness endpoint listening on {}", listener.local_addr()?);

    axum::serve(listener, router::router()).await?;

    Ok(())
}
