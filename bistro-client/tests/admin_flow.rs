//! Admin client against an in-process backend

mod common;

use bistro_client::auth::LOGIN_FAILED;
use bistro_client::{
    AuthGate, CateringRequest, CateringStatus, ClientConfig, ClientError, FileTokenStore,
    MemoryTokenStore, NetworkHttpClient, Reservation, ReservationStatus, StatusAction, TokenStore,
};
use common::{Endpoint, MockServer, PASSWORD, SILENT_USER, TOKEN, USERNAME};
use serde_json::json;

fn http(base_url: &str) -> NetworkHttpClient {
    NetworkHttpClient::new(&ClientConfig::new(base_url)).unwrap()
}

fn gate(server: &MockServer) -> AuthGate<NetworkHttpClient, MemoryTokenStore> {
    AuthGate::new(http(&server.base_url), MemoryTokenStore::new())
}

async fn logged_in(server: &MockServer) -> AuthGate<NetworkHttpClient, MemoryTokenStore> {
    let mut gate = gate(server);
    gate.login(USERNAME, PASSWORD).await.unwrap();
    gate
}

// ========== Auth ==========

#[tokio::test]
async fn test_login_stores_token() {
    let server = common::spawn().await;
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path());
    let mut gate = AuthGate::new(http(&server.base_url), store.clone());

    let token = gate.login(USERNAME, PASSWORD).await.unwrap();

    assert_eq!(token, TOKEN);
    assert!(gate.is_authenticated());
    assert_eq!(store.load().as_deref(), Some(TOKEN));
    assert!(dir.path().join("admin_token.json").exists());
}

#[tokio::test]
async fn test_login_rejected_shows_server_message() {
    let server = common::spawn().await;
    let mut gate = gate(&server);

    let err = gate.login(USERNAME, "wrong").await.unwrap_err();

    assert!(matches!(&err, ClientError::Auth(message) if message == "Invalid credentials"));
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(!gate.is_authenticated());
    assert_eq!(gate.store().load(), None);
}

#[tokio::test]
async fn test_login_without_token_uses_fallback_message() {
    let server = common::spawn().await;
    let mut gate = gate(&server);

    let err = gate.login(SILENT_USER, PASSWORD).await.unwrap_err();

    assert!(matches!(&err, ClientError::Auth(message) if message == LOGIN_FAILED));
    assert!(!gate.is_authenticated());
}

#[tokio::test]
async fn test_login_network_failure() {
    let url = common::dead_url().await;
    let mut gate = AuthGate::new(http(&url), MemoryTokenStore::new());

    let err = gate.login(USERNAME, PASSWORD).await.unwrap_err();

    assert!(matches!(err, ClientError::Http(_)));
    assert!(!gate.is_authenticated());
    assert_eq!(gate.store().load(), None);
}

#[tokio::test]
async fn test_init_with_valid_token() {
    let server = common::spawn().await;
    let mut gate = AuthGate::new(http(&server.base_url), MemoryTokenStore::with_token(TOKEN));

    assert!(gate.init().await);
    assert_eq!(gate.token(), Some(TOKEN));
    assert!(gate.session().is_ok());
}

#[tokio::test]
async fn test_init_with_stale_token_clears_it() {
    let server = common::spawn().await;
    let mut gate = AuthGate::new(
        http(&server.base_url),
        MemoryTokenStore::with_token("expired"),
    );

    assert!(!gate.init().await);
    assert!(!gate.is_authenticated());
    assert_eq!(gate.store().load(), None);
    assert!(matches!(gate.session(), Err(ClientError::Unauthorized)));
}

#[tokio::test]
async fn test_init_without_stored_token() {
    let server = common::spawn().await;
    let mut gate = gate(&server);
    assert!(!gate.init().await);
}

#[tokio::test]
async fn test_logout_clears_token() {
    let server = common::spawn().await;
    let mut gate = logged_in(&server).await;

    gate.logout().unwrap();

    assert!(!gate.is_authenticated());
    assert_eq!(gate.store().load(), None);
}

// ========== Dashboard ==========

#[tokio::test]
async fn test_refresh_loads_everything() {
    let server = common::spawn().await;
    let mut session = logged_in(&server).await.session().unwrap();

    let report = session.refresh().await;

    assert!(report.is_complete());
    assert_eq!(session.data().reservations.len(), 4);
    assert_eq!(session.data().catering.len(), 1);
    assert_eq!(
        session.data().stats.as_ref().map(|s| s.total_customers),
        Some(412)
    );
}

#[tokio::test]
async fn test_refresh_partial_failure_keeps_previous_slice() {
    let server = common::spawn().await;
    let mut session = logged_in(&server).await.session().unwrap();
    session.refresh().await;
    let catering_before = session.data().catering.clone();

    server.backend.fail(Endpoint::Catering);
    server.backend.reservations.lock().unwrap().push(common::reservation(
        5,
        "New Guest",
        ReservationStatus::Pending,
    ));
    server.backend.catering.lock().unwrap().clear();

    let report = session.refresh().await;

    assert!(report.reservations);
    assert!(!report.catering);
    assert!(report.stats);
    assert_eq!(session.data().reservations.len(), 5);
    assert_eq!(session.data().catering, catering_before);
}

#[tokio::test]
async fn test_refresh_without_auth_loads_nothing() {
    let server = common::spawn().await;
    let mut session = bistro_client::AdminSession::new(http(&server.base_url));

    let report = session.refresh().await;

    assert_eq!(report, Default::default());
    assert!(session.data().reservations.is_empty());
    assert!(session.data().stats.is_none());
}

// ========== Status updates ==========

#[tokio::test]
async fn test_update_status_patches_exactly_one_record() {
    let server = common::spawn().await;
    let mut session = logged_in(&server).await.session().unwrap();
    session.refresh().await;
    let before = session.data().reservations.clone();

    session
        .update_reservation_status(2, ReservationStatus::Confirmed)
        .await
        .unwrap();

    let after = &session.data().reservations;
    let changed: Vec<i64> = before
        .iter()
        .zip(after)
        .filter(|(b, a)| b != a)
        .map(|(_, a)| a.id)
        .collect();
    assert_eq!(changed, vec![2]);
    assert_eq!(after[1].status, ReservationStatus::Confirmed);

    let patches = server.backend.patches();
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].collection, "reservations");
    assert_eq!(patches[0].id, 2);
    assert_eq!(patches[0].body, json!({ "status": "confirmed" }));
}

#[tokio::test]
async fn test_update_status_failure_leaves_state() {
    let server = common::spawn().await;
    let mut session = logged_in(&server).await.session().unwrap();
    session.refresh().await;
    let before = session.data().clone();
    server.backend.fail(Endpoint::Patch);

    let result = session
        .update_catering_status(10, CateringStatus::Confirmed)
        .await;

    assert!(matches!(result, Err(ClientError::Api { status: 500, .. })));
    assert_eq!(session.data(), &before);
}

#[tokio::test]
async fn test_apply_action_moves_status() {
    let server = common::spawn().await;
    let mut session = logged_in(&server).await.session().unwrap();
    session.refresh().await;

    let status = session
        .apply_action::<CateringRequest>(10, StatusAction::Cancel)
        .await
        .unwrap();

    assert_eq!(status, CateringStatus::Cancelled);
    assert_eq!(session.data().catering[0].status, CateringStatus::Cancelled);
    assert_eq!(server.backend.patches()[0].body, json!({ "status": "cancelled" }));
}

#[tokio::test]
async fn test_apply_action_refuses_invalid_transition() {
    let server = common::spawn().await;
    let mut session = logged_in(&server).await.session().unwrap();
    session.refresh().await;

    let err = session
        .apply_action::<Reservation>(4, StatusAction::Confirm)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::InvalidTransition {
            action: StatusAction::Confirm,
            ..
        }
    ));
    assert!(server.backend.patches().is_empty());
}

#[tokio::test]
async fn test_apply_action_unknown_record() {
    let server = common::spawn().await;
    let mut session = logged_in(&server).await.session().unwrap();
    session.refresh().await;

    let err = session
        .apply_action::<Reservation>(99, StatusAction::Cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NotFound(_)));
    assert!(server.backend.patches().is_empty());
}
