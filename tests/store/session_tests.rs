//! Integration tests for session transitions alongside board activity.

use super::helpers::{DemoStore, column_id, demo_store};
use corkboard::board::domain::{Tag, TaskDraft};
use corkboard::demo::TODO_COLUMN_ID;
use corkboard::notify::NotificationKind;
use corkboard::notify::adapters::RecordingNotifier;
use corkboard::session::adapters::MockVerifier;
use corkboard::session::domain::{AuthError, Credentials, Registration};
use corkboard::session::services::SessionManager;
use rstest::rstest;
use std::sync::Arc;

#[rstest]
fn a_full_session_flow_shares_one_notification_stream(
    demo_store: (DemoStore, RecordingNotifier),
) {
    let (mut store, notifier) = demo_store;
    let mut session = SessionManager::new(
        Arc::new(MockVerifier::new()),
        Arc::new(notifier.clone()),
    );

    session
        .login(&Credentials::new("demo@example.com", "pw"))
        .expect("login succeeds");
    let draft = TaskDraft::new("Plan sprint review", "", Tag::Blue).expect("valid draft");
    store
        .add_task(&column_id(TODO_COLUMN_ID), draft)
        .expect("task added");
    session.logout();

    assert_eq!(
        notifier.messages(),
        vec![
            "Logged in successfully".to_owned(),
            "Task added successfully".to_owned(),
            "Logged out successfully".to_owned(),
        ]
    );
}

#[rstest]
fn a_rejected_login_surfaces_an_error_notification(
    demo_store: (DemoStore, RecordingNotifier),
) {
    let (_store, notifier) = demo_store;
    let mut session = SessionManager::new(
        Arc::new(MockVerifier::new()),
        Arc::new(notifier.clone()),
    );

    let result = session.login(&Credentials::new("", "pw"));

    assert_eq!(result, Err(AuthError::InvalidCredentials));
    assert!(!session.is_authenticated());
    let delivered = notifier.delivered();
    assert_eq!(
        delivered.first().map(|notification| notification.kind),
        Some(NotificationKind::Error)
    );
}

#[rstest]
fn signup_then_logout_round_trips_session_state(demo_store: (DemoStore, RecordingNotifier)) {
    let (_store, notifier) = demo_store;
    let mut session = SessionManager::new(
        Arc::new(MockVerifier::new()),
        Arc::new(notifier.clone()),
    );

    let user = session
        .signup(&Registration::new("Grace", "grace@example.com", "pw"))
        .expect("signup succeeds");
    assert!(session.is_authenticated());
    assert_eq!(user.email(), "grace@example.com");

    session.logout();
    assert!(session.current_user().is_none());
}
