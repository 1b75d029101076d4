//! Event catalog domain models.
//!
//! The catalog is loaded once at startup and never mutated. Each event has a unique
//! name, which doubles as the routing key carried by interaction buttons, and one or
//! more daily start times in the configured event timezone.

use std::{collections::HashSet, fmt};

use serde::Deserialize;

use crate::{
    error::config::ConfigError,
    model::interaction::MAX_EVENT_NAME_LEN,
    util::time::compute_trigger_time,
};

/// How long before an event starts its reminder is posted.
pub const REMINDER_LEAD_MINUTES: u8 = 10;

/// Discord allows at most 25 choices on a slash command option.
pub const MAX_EVENTS: usize = 25;

/// Events posted when no catalog file is configured, with London start times.
const BUILTIN_CATALOG: &[(&str, &[&str])] = &[
    (
        "Harbor",
        &[
            "04:10", "07:10", "10:10", "13:10", "16:10", "19:10", "22:10", "01:10",
        ],
    ),
    ("RP Ticket Factory", &["10:30", "16:30", "22:30"]),
    ("Weapons Factory", &["22:20", "03:20"]),
    ("Shopping Center", &["17:15"]),
];

/// A local time of day, normalized to `00:00..=23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventTime {
    hour: u8,
    minute: u8,
}

impl EventTime {
    /// Creates a time of day, returning `None` when either field is out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour <= 23 && minute <= 59).then_some(Self { hour, minute })
    }

    /// Parses a 24-hour `HH:MM` string.
    ///
    /// The hour may be written with one or two digits (`4:10` and `04:10` are
    /// equivalent), the minute must always have two.
    ///
    /// # Returns
    /// - `Some(EventTime)` - Valid time of day
    /// - `None` - Malformed string or out of range value
    pub fn parse(value: &str) -> Option<Self> {
        let (hour, minute) = value.trim().split_once(':')?;

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(hour) || hour.len() > 2 || !all_digits(minute) || minute.len() != 2 {
            return None;
        }

        Self::new(hour.parse().ok()?, minute.parse().ok()?)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Time of day a reminder for an event starting at `self` fires.
    pub fn trigger_time(self, lead_minutes: u8) -> Self {
        let (hour, minute) = compute_trigger_time(self.hour, self.minute, lead_minutes);
        Self { hour, minute }
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A recurring event and the daily local times it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDefinition {
    pub name: String,
    pub daily_times: Vec<EventTime>,
}

/// Raw catalog entry as written in the catalog JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub times: Vec<String>,
}

/// The validated, ordered set of events the bot posts reminders for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCatalog {
    events: Vec<EventDefinition>,
}

impl EventCatalog {
    /// Builds a catalog from raw entries, validating every name and time.
    ///
    /// Event order and per-event time order are preserved.
    ///
    /// # Returns
    /// - `Ok(EventCatalog)` - Validated catalog
    /// - `Err(ConfigError::InvalidEventTime)` - A time is not valid `HH:MM`
    /// - `Err(ConfigError::InvalidCatalog)` - Empty catalog, too many events, empty,
    ///   overlong or duplicate names, events without times or repeated times
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::InvalidCatalog(
                "at least one event is required".to_string(),
            ));
        }
        if entries.len() > MAX_EVENTS {
            return Err(ConfigError::InvalidCatalog(format!(
                "{} events configured, at most {} are supported",
                entries.len(),
                MAX_EVENTS
            )));
        }

        let mut seen_names = HashSet::new();
        let mut events = Vec::with_capacity(entries.len());

        for entry in entries {
            let name = entry.name.trim().to_string();

            if name.is_empty() {
                return Err(ConfigError::InvalidCatalog(
                    "event names must not be empty".to_string(),
                ));
            }
            if name.chars().count() > MAX_EVENT_NAME_LEN {
                return Err(ConfigError::InvalidCatalog(format!(
                    "event name '{}' is longer than {} characters",
                    name, MAX_EVENT_NAME_LEN
                )));
            }
            if !seen_names.insert(name.clone()) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "event '{}' is defined more than once",
                    name
                )));
            }
            if entry.times.is_empty() {
                return Err(ConfigError::InvalidCatalog(format!(
                    "event '{}' has no start times",
                    name
                )));
            }

            let mut daily_times = Vec::with_capacity(entry.times.len());
            for value in entry.times {
                let time =
                    EventTime::parse(&value).ok_or_else(|| ConfigError::InvalidEventTime {
                        event: name.clone(),
                        value: value.clone(),
                    })?;

                if daily_times.contains(&time) {
                    return Err(ConfigError::InvalidCatalog(format!(
                        "event '{}' lists start time {} more than once",
                        name, time
                    )));
                }
                daily_times.push(time);
            }

            events.push(EventDefinition { name, daily_times });
        }

        Ok(Self { events })
    }

    /// Parses a catalog from its JSON representation.
    ///
    /// # Arguments
    /// - `json` - JSON array of `{"name": ..., "times": ["HH:MM", ...]}` objects
    /// - `source` - Where the JSON came from, used in error messages
    pub fn from_json(json: &str, source: &str) -> Result<Self, ConfigError> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(json).map_err(|e| ConfigError::CatalogParse {
                path: source.to_string(),
                source: e,
            })?;

        Self::from_entries(entries)
    }

    /// The catalog used when no catalog file is configured.
    pub fn builtin() -> Result<Self, ConfigError> {
        let entries = BUILTIN_CATALOG
            .iter()
            .map(|(name, times)| CatalogEntry {
                name: name.to_string(),
                times: times.iter().map(|t| t.to_string()).collect(),
            })
            .collect();

        Self::from_entries(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventDefinition> {
        self.events.iter()
    }

    pub fn get(&self, name: &str) -> Option<&EventDefinition> {
        self.events.iter().find(|event| event.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|event| event.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
