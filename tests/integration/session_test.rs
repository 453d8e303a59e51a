//! Integration tests for session lifecycle, expiry, and snapshot semantics.

use chrono::Duration;

use bludee_entity::permission::Capability;
use bludee_entity::user::Role;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_logout_is_idempotent_safe() {
    let app = TestApp::new();
    let token = app.login("maria.garcia", "123456").await;

    assert!(app.auth.logout(&token));
    assert!(!app.auth.logout(&token));

    // The session is gone for every query path.
    assert!(!app.authorizer.check_permission(&token, Capability::Requests));
    assert!(app.menu.build_menu(&token).is_empty());
    assert!(app.auth.session_info(&token).is_none());
}

#[tokio::test]
async fn test_session_info_reports_live_session() {
    let app = TestApp::new();
    let token = app.login("carlos.rodriguez", "banco123").await;

    let session = app.auth.session_info(&token).unwrap();
    assert_eq!(session.username, "carlos.rodriguez");
    assert_eq!(session.role, Role::Bank);
    assert_eq!(session.organization, "Banco Central PR");
    assert_eq!(session.expires_at - session.login_at, Duration::hours(8));
    assert!(session.remaining() > Duration::hours(7));
}

#[test]
fn test_expiry_boundary() {
    let app = TestApp::new();

    // Just inside the window: the computed result.
    app.plant_session("fresh", Role::Bank, Duration::hours(8) - Duration::seconds(1));
    assert!(app.authorizer.check_permission("fresh", Capability::Inventory));
    assert!(!app.authorizer.check_permission("fresh", Capability::Users));

    // Just past the window: denied, and the token is evicted.
    app.plant_session("stale", Role::Bank, -Duration::seconds(1));
    assert!(!app.authorizer.check_permission("stale", Capability::Inventory));
    assert!(!app.session_store.contains("stale"));

    // A second observation behaves as plain "not found".
    assert!(!app.authorizer.check_permission("stale", Capability::Inventory));
}

#[test]
fn test_expired_session_info_is_absent_and_evicted() {
    let app = TestApp::new();
    app.plant_session("stale", Role::Admin, -Duration::minutes(5));

    assert!(app.auth.session_info("stale").is_none());
    assert!(!app.session_store.contains("stale"));
}

#[test]
fn test_permission_checks_do_not_extend_expiry() {
    let app = TestApp::new();
    let planted = app.plant_session("tok", Role::Admin, Duration::hours(8));

    for _ in 0..10 {
        assert!(app.authorizer.check_permission("tok", Capability::Users));
    }

    let session = app.auth.session_info("tok").unwrap();
    assert_eq!(session.expires_at, planted.expires_at);
}

#[tokio::test]
async fn test_session_role_is_a_login_time_snapshot() {
    let app = TestApp::new();
    app.create_test_account("promoted", "pw123456", Role::HospitalReceiver, true);

    let token = app.login("promoted", "pw123456").await;
    assert!(!app.authorizer.check_permission(&token, Capability::Users));
    assert!(app.authorizer.check_permission(&token, Capability::Requests));

    // Reassign the account's role after login.
    app.create_test_account("promoted", "pw123456", Role::Admin, true);

    // The live session keeps the role captured at login time.
    assert!(!app.authorizer.check_permission(&token, Capability::Users));
    assert!(app.authorizer.check_permission(&token, Capability::Requests));

    // A fresh login picks up the new role.
    let new_token = app.login("promoted", "pw123456").await;
    assert!(app.authorizer.check_permission(&new_token, Capability::Users));
}
