//! Application state shared by the bot handlers and the scheduler.

use std::sync::Arc;

use crate::{config::Config, service::registration::RegistrationStore};

/// Shared state handed to the Discord event handler and every reminder job.
///
/// Cheap to clone: the configuration is behind an `Arc` and the registration store
/// shares its rosters between clones.
#[derive(Clone)]
pub struct AppState {
    /// Static configuration loaded at startup
    pub config: Arc<Config>,

    /// Event rosters, kept in memory for the lifetime of the process
    pub registrations: RegistrationStore,
}

impl AppState {
    pub fn new(config: Arc<Config>, registrations: RegistrationStore) -> Self {
        Self {
            config,
            registrations,
        }
    }
}
