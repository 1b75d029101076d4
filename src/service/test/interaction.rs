use super::*;

/// Tests registering through the register button.
///
/// Verifies the first press registers the user and a second press from the same
/// user reports they are already registered without touching the roster.
///
/// Expected: success notice, then already-registered notice, roster of one
#[tokio::test]
async fn registers_once_per_user() {
    let state = state_with_catalog(fixture::harbor_catalog_json());
    let request = InteractionRequest::Register("Harbor".to_string());

    let first = notice(&state, request.clone(), "alice").await;
    let second = notice(&state, request, "alice").await;

    assert_eq!(first, "✅ You have been registered for **Harbor**!");
    assert_eq!(second, "⚠️ You are already registered for **Harbor**!");
    assert_eq!(state.registrations.list("Harbor").await, vec!["alice"]);
}

/// Tests the show button on an event nobody registered for.
///
/// Expected: roster placeholder in the reply
#[tokio::test]
async fn shows_placeholder_for_empty_roster() {
    let state = state_with_catalog(fixture::harbor_catalog_json());

    let reply = notice(&state, InteractionRequest::Show("Harbor".to_string()), "bob").await;

    assert_eq!(reply, "📋 Registered participants for **Harbor**:\nNone yet");
}

#[tokio::test]
async fn shows_roster_in_registration_order() {
    let state = state_with_catalog(fixture::harbor_catalog_json());
    for participant in ["carol", "alice", "bob"] {
        notice(&state, InteractionRequest::Register("Harbor".to_string()), participant).await;
    }

    let reply = notice(&state, InteractionRequest::Show("Harbor".to_string()), "dave").await;

    assert_eq!(
        reply,
        "📋 Registered participants for **Harbor**:\ncarol\nalice\nbob"
    );
}

/// Tests routing for event names containing the old delimiter characters.
///
/// Expected: the button round-trips and registers against the right event
#[tokio::test]
async fn routes_event_names_with_delimiters() {
    let state = state_with_catalog(fixture::rollover_catalog_json());
    let custom_id = ButtonAction::Register.custom_id("Night_Run: Docks");
    let request = InteractionRequest::from_custom_id(&custom_id).unwrap();

    let reply = notice(&state, request, "alice").await;

    assert_eq!(reply, "✅ You have been registered for **Night_Run: Docks**!");
    assert_eq!(state.registrations.list("Night_Run: Docks").await, vec!["alice"]);
    assert!(state.registrations.list("Harbor").await.is_empty());
}

/// Tests requests for an event missing from the catalog.
///
/// Expected: no reply and no roster created
#[tokio::test]
async fn ignores_unknown_events() {
    let state = state_with_catalog(fixture::harbor_catalog_json());
    let service = InteractionService::new(&state.config, &state.registrations);

    for request in [
        InteractionRequest::Register("Casino".to_string()),
        InteractionRequest::Show("Casino".to_string()),
        InteractionRequest::Preview("Casino".to_string()),
    ] {
        assert_eq!(service.handle(request, "alice").await, None);
    }
    assert!(!state.registrations.is_tracked("Casino").await);
}

/// Tests the preview command.
///
/// Verifies the preview renders the same reminder as a dispatch but without a
/// start time, and reflects the current roster.
///
/// Expected: reminder reply with no start time and the roster so far
#[tokio::test]
async fn previews_reminder_without_start_time() {
    let state = state_with_catalog(fixture::harbor_catalog_json());
    notice(&state, InteractionRequest::Register("Harbor".to_string()), "alice").await;
    let service = InteractionService::new(&state.config, &state.registrations);

    let reply = service
        .handle(InteractionRequest::Preview("Harbor".to_string()), "bob")
        .await;

    let Some(InteractionReply::Reminder(reminder)) = reply else {
        panic!("expected a reminder preview, got {:?}", reply);
    };
    assert!(reminder.is_preview());
    assert_eq!(reminder.event_name, "Harbor");
    assert_eq!(reminder.participants, vec!["alice"]);
    assert_eq!(reminder.title(), "Harbor starts in 10 minutes!");
    assert_eq!(reminder.info_url, fixture::EVENTS_CHANNEL_URL);
}

/// Tests that the show reply stays within Discord's message limit.
#[tokio::test]
async fn truncates_large_rosters_in_show_reply() {
    let state = state_with_catalog(fixture::harbor_catalog_json());
    for i in 0..300 {
        state
            .registrations
            .register("Harbor", &format!("participant-{i:03}"))
            .await;
    }

    let reply = notice(&state, InteractionRequest::Show("Harbor".to_string()), "alice").await;

    assert!(reply.chars().count() <= 2000);
    assert!(reply.ends_with("more"));
}
