//! In-memory event registration store.
//!
//! This module provides the `RegistrationStore` holding, per event, the ordered list
//! of participants who pressed "Register Yourself". Registrations live for the
//! lifetime of the process and are lost on restart. There is no way to unregister.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Result of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Participant was appended to the roster
    Registered,
    /// Participant was already on the roster, nothing changed
    AlreadyRegistered,
}

/// Shared store of event rosters keyed by event name.
///
/// Rosters are created lazily the first time an event is touched, either by a
/// scheduled reminder reading it or by an interaction, and never removed. Each roster
/// preserves insertion order and holds every participant at most once.
///
/// Cloning is cheap and every clone shares the same rosters. The membership check and
/// append in `register` happen under one write lock, so concurrent registrations for
/// the same participant cannot both succeed.
#[derive(Clone, Default)]
pub struct RegistrationStore {
    rosters: Arc<RwLock<HashMap<String, Vec<String>>>>,
}

impl RegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a participant for an event.
    ///
    /// # Arguments
    /// - `event_name` - Event to register for
    /// - `participant` - Participant identity, the Discord username
    ///
    /// # Returns
    /// - `RegistrationOutcome::Registered` - Participant appended to the roster
    /// - `RegistrationOutcome::AlreadyRegistered` - Participant was already present
    pub async fn register(&self, event_name: &str, participant: &str) -> RegistrationOutcome {
        let mut rosters = self.rosters.write().await;
        let roster = rosters.entry(event_name.to_string()).or_default();

        if roster.iter().any(|p| p == participant) {
            return RegistrationOutcome::AlreadyRegistered;
        }

        roster.push(participant.to_string());
        RegistrationOutcome::Registered
    }

    /// Lists the participants registered for an event in registration order.
    ///
    /// Starts tracking the event with an empty roster if it has never been seen.
    pub async fn list(&self, event_name: &str) -> Vec<String> {
        let mut rosters = self.rosters.write().await;
        rosters.entry(event_name.to_string()).or_default().clone()
    }

    /// Checks whether an event has been touched since startup.
    #[cfg(test)]
    pub async fn is_tracked(&self, event_name: &str) -> bool {
        self.rosters.read().await.contains_key(event_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests registering the same participant twice.
    ///
    /// Verifies the second attempt reports the participant as already registered
    /// and leaves the roster unchanged.
    ///
    /// Expected: Registered, then AlreadyRegistered with a single roster entry
    #[tokio::test]
    async fn registration_is_idempotent() {
        let store = RegistrationStore::new();

        assert_eq!(
            store.register("Harbor", "alice").await,
            RegistrationOutcome::Registered
        );
        assert_eq!(
            store.register("Harbor", "alice").await,
            RegistrationOutcome::AlreadyRegistered
        );
        assert_eq!(store.list("Harbor").await, vec!["alice"]);
    }

    /// Tests that rosters keep registration order.
    ///
    /// Expected: participants listed exactly in the order they registered
    #[tokio::test]
    async fn preserves_registration_order() {
        let store = RegistrationStore::new();

        for participant in ["carol", "alice", "bob"] {
            store.register("Harbor", participant).await;
        }
        store.register("Harbor", "alice").await;

        assert_eq!(store.list("Harbor").await, vec!["carol", "alice", "bob"]);
    }

    /// Tests listing an event nobody has touched yet.
    ///
    /// Expected: empty roster and the event becomes tracked
    #[tokio::test]
    async fn lists_unseen_event_as_empty() {
        let store = RegistrationStore::new();
        assert!(!store.is_tracked("Shopping Center").await);

        assert!(store.list("Shopping Center").await.is_empty());
        assert!(store.is_tracked("Shopping Center").await);
    }

    #[tokio::test]
    async fn rosters_are_per_event() {
        let store = RegistrationStore::new();

        store.register("Harbor", "alice").await;
        let outcome = store.register("Weapons Factory", "alice").await;

        assert_eq!(outcome, RegistrationOutcome::Registered);
        assert_eq!(store.list("Harbor").await, vec!["alice"]);
        assert_eq!(store.list("Weapons Factory").await, vec!["alice"]);
    }

    #[tokio::test]
    async fn clones_share_rosters() {
        let store = RegistrationStore::new();
        let clone = store.clone();

        clone.register("Harbor", "alice").await;

        assert_eq!(store.list("Harbor").await, vec!["alice"]);
    }

    /// Tests racing registrations of the same participant across tasks.
    ///
    /// Expected: exactly one task registers, the roster holds one entry
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_duplicates_register_once() {
        let store = RegistrationStore::new();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.register("Harbor", "alice").await })
            })
            .collect();

        let mut registered = 0;
        for handle in handles {
            if handle.await.unwrap() == RegistrationOutcome::Registered {
                registered += 1;
            }
        }

        assert_eq!(registered, 1);
        assert_eq!(store.list("Harbor").await.len(), 1);
    }
}
