//! Error types for startup and background tasks.
//!
//! `AppError` is the top-level error returned from `main` and from every fallible
//! operation in the bot. Startup errors terminate the process, while errors raised
//! inside scheduled reminders or interaction handlers are logged and swallowed by
//! their callers so a single failure never takes the bot down.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal, configuration issues prevent the bot from starting.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised when connecting the bot, fetching guild
    /// channels and roles, or sending messages and interaction responses.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    ///
    /// Raised when a reminder job cannot be created or the scheduler fails to start.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// I/O error, currently only from binding the liveness endpoint listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
