//! Cron jobs posting event reminders.

pub mod event_reminders;
