use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The rejected value
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Timezone name is not a known IANA zone.
    #[error("Unknown timezone '{0}'")]
    InvalidTimezone(String),

    /// Event start time is not a valid 24-hour `HH:MM` value.
    #[error("Invalid start time '{value}' for event '{event}', expected HH:MM")]
    InvalidEventTime {
        /// Event the time belongs to
        event: String,
        /// The rejected time string
        value: String,
    },

    /// Event catalog violates a structural rule (empty, duplicates, name limits).
    #[error("Invalid event catalog: {0}")]
    InvalidCatalog(String),

    /// Event catalog file could not be read.
    #[error("Failed to read event catalog '{path}': {source}")]
    CatalogRead {
        /// Path of the catalog file
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Event catalog file is not valid JSON of the expected shape.
    #[error("Failed to parse event catalog '{path}': {source}")]
    CatalogParse {
        /// Path of the catalog file
        path: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
