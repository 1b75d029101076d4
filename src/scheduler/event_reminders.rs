use chrono::Utc;
use dioxus_logger::tracing;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    model::event::{EventCatalog, EventTime, REMINDER_LEAD_MINUTES},
    service::reminder::{gateway::ReminderGateway, DispatchOutcome, ReminderService},
    state::AppState,
};

/// One daily reminder derived from the event catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedReminder {
    pub event_name: String,
    /// Start time of the occurrence the reminder announces
    pub start_time: EventTime,
    /// Local time the reminder fires
    pub trigger: EventTime,
}

/// Expands the catalog into one reminder per event start time, in catalog order.
pub fn plan_reminders(catalog: &EventCatalog, lead_minutes: u8) -> Vec<PlannedReminder> {
    catalog
        .iter()
        .flat_map(|event| {
            event.daily_times.iter().map(move |start_time| PlannedReminder {
                event_name: event.name.clone(),
                start_time: *start_time,
                trigger: start_time.trigger_time(lead_minutes),
            })
        })
        .collect()
}

/// Daily cron expression (seconds first) firing at the given local time.
pub fn cron_expression(trigger: EventTime) -> String {
    format!("0 {} {} * * *", trigger.minute(), trigger.hour())
}

/// Starts the event reminder scheduler
///
/// Registers one daily job per event start time, evaluated in the configured event
/// timezone and firing ten minutes before the event starts. Jobs run until the
/// process exits. A failed firing is logged and the job keeps its schedule.
///
/// # Arguments
/// - `state`: Shared application state
/// - `discord_http`: Discord HTTP client for posting reminders
pub async fn start_scheduler(state: AppState, discord_http: Arc<Http>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;
    let timezone = state.config.timezone;

    let plan = plan_reminders(&state.config.catalog, REMINDER_LEAD_MINUTES);

    for reminder in &plan {
        let schedule = cron_expression(reminder.trigger);

        // Clone resources for the job
        let job_state = state.clone();
        let job_http = discord_http.clone();
        let event_name = reminder.event_name.clone();
        let start_time = reminder.start_time;

        let job = Job::new_async_tz(schedule.as_str(), timezone, move |_uuid, _lock| {
            let state = job_state.clone();
            let http = job_http.clone();
            let event_name = event_name.clone();

            Box::pin(async move {
                fire_reminder(&state, &http, &event_name, start_time).await;
            })
        })?;

        scheduler.add(job).await?;

        tracing::debug!(
            "Scheduled {} reminder for {} at {} ({})",
            reminder.event_name,
            reminder.start_time,
            reminder.trigger,
            schedule
        );
    }

    scheduler.start().await?;

    tracing::info!(
        "Event reminder scheduler started with {} jobs in {}",
        plan.len(),
        timezone.name()
    );

    Ok(())
}

/// Runs a single reminder firing, logging instead of propagating failures
async fn fire_reminder<G: ReminderGateway>(
    state: &AppState,
    gateway: &G,
    event_name: &str,
    start_time: EventTime,
) -> Option<DispatchOutcome> {
    let service = ReminderService::new(state, gateway);
    let fired_at = Utc::now().with_timezone(&state.config.timezone);

    tracing::debug!(
        "Firing {} reminder for {} at {}",
        event_name,
        start_time,
        fired_at.format("%Y-%m-%d %H:%M:%S %Z")
    );

    match service.dispatch(event_name, start_time).await {
        Ok(outcome) => {
            if let DispatchOutcome::Sent(message_id) = outcome {
                tracing::debug!("{} reminder posted as message {}", event_name, message_id);
            }
            Some(outcome)
        }
        Err(e) => {
            tracing::error!("Error posting {} reminder for {}: {}", event_name, start_time, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use test_utils::fixture::config as fixture;

    use super::*;
    use crate::{
        config::Config, service::registration::RegistrationStore,
        service::reminder::mock::MockGateway,
    };

    fn catalog(json: serde_json::Value) -> EventCatalog {
        EventCatalog::from_json(&json.to_string(), "fixture").unwrap()
    }

    /// Tests expanding a catalog with several events and times.
    ///
    /// Expected: one entry per start time, in catalog order, with day rollback
    #[test]
    fn plans_one_reminder_per_start_time() {
        let plan = plan_reminders(&catalog(fixture::rollover_catalog_json()), 10);

        let summary: Vec<(String, String, String)> = plan
            .iter()
            .map(|r| {
                (
                    r.event_name.clone(),
                    r.start_time.to_string(),
                    r.trigger.to_string(),
                )
            })
            .collect();

        let expected = [
            ("Harbor", "04:10", "04:00"),
            ("Harbor", "00:05", "23:55"),
            ("Night_Run: Docks", "00:00", "23:50"),
            ("Night_Run: Docks", "12:30", "12:20"),
        ];
        assert_eq!(
            summary,
            expected
                .iter()
                .map(|(e, s, t)| (e.to_string(), s.to_string(), t.to_string()))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn plans_builtin_catalog() {
        let plan = plan_reminders(&EventCatalog::builtin().unwrap(), REMINDER_LEAD_MINUTES);

        assert_eq!(plan.len(), 14);
        assert!(plan.iter().any(|r| r.event_name == "Shopping Center"
            && r.trigger == EventTime::new(17, 5).unwrap()));
    }

    #[test]
    fn formats_daily_cron_expression() {
        assert_eq!(cron_expression(EventTime::new(4, 0).unwrap()), "0 0 4 * * *");
        assert_eq!(cron_expression(EventTime::new(23, 55).unwrap()), "0 55 23 * * *");
    }

    /// Tests that the scheduler accepts every planned expression in the event zone.
    ///
    /// Expected: Ok for every job in the built-in catalog
    #[tokio::test]
    async fn scheduler_accepts_planned_jobs() {
        let plan = plan_reminders(&EventCatalog::builtin().unwrap(), REMINDER_LEAD_MINUTES);

        for reminder in plan {
            let schedule = cron_expression(reminder.trigger);
            let job = Job::new_async_tz(schedule.as_str(), chrono_tz::Europe::London, |_, _| {
                Box::pin(async {})
            });

            assert!(job.is_ok(), "rejected {schedule}");
        }
    }

    /// Tests that a failed firing is logged and the next firing still posts.
    ///
    /// Expected: None for the failed firing, then Sent once the guild is reachable
    #[tokio::test]
    async fn failed_firing_does_not_stop_later_firings() {
        let env = fixture::env();
        let config = Config::from_lookup(|name| env.get(name).cloned()).unwrap();
        let state = AppState::new(Arc::new(config), RegistrationStore::new());
        let gateway = MockGateway::with_guild(fixture::CHANNEL_ID, fixture::ROLE_ID);
        let start = EventTime::new(4, 10).unwrap();

        gateway.set_fail_on_lookup(true).await;
        assert_eq!(fire_reminder(&state, &gateway, "Harbor", start).await, None);

        gateway.set_fail_on_lookup(false).await;
        assert!(matches!(
            fire_reminder(&state, &gateway, "Harbor", start).await,
            Some(DispatchOutcome::Sent(_))
        ));
        assert_eq!(gateway.posted().await.len(), 1);
    }

    #[tokio::test]
    async fn skipped_firing_posts_nothing() {
        let env = fixture::env();
        let config = Config::from_lookup(|name| env.get(name).cloned()).unwrap();
        let state = AppState::new(Arc::new(config), RegistrationStore::new());
        let gateway = MockGateway::default().with_role(fixture::ROLE_ID);

        let start = EventTime::new(4, 10).unwrap();

        let outcome = fire_reminder(&state, &gateway, "Harbor", start).await;

        assert_eq!(outcome, Some(DispatchOutcome::Skipped));
        assert!(gateway.posted().await.is_empty());
    }
}
