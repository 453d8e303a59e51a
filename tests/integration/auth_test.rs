//! Integration tests for the authentication flow.

use bludee_auth::UserDirectory;
use bludee_auth::error::AuthError;
use bludee_entity::permission::Capability;
use bludee_entity::user::Role;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_admin_login_end_to_end() {
    let app = TestApp::new();

    let response = app.auth.authenticate("admin", "admin2025").await.unwrap();
    assert_eq!(response.message, "Login exitoso");

    let info = &response.user_info;
    assert_eq!(info.username, "admin");
    assert_eq!(info.name, "Administrador Sistema");
    assert_eq!(info.role, Role::Admin);
    assert_eq!(info.organization, "Sistema Bludee");
    assert_eq!(info.email, "admin@bludee.pr");
    assert_eq!(info.capabilities.len(), 11);
    assert_eq!(info.modules.len(), 4);

    // ADMIN has items in all four sections.
    let menu = app.menu.build_menu(&info.session_token);
    let sections: Vec<&str> = menu.iter().map(|s| s.section.as_str()).collect();
    assert_eq!(sections, vec!["distribution", "reception", "hub", "admin"]);

    let token = &info.session_token;
    assert!(app.authorizer.check_permission(token, Capability::Inventory));
    assert!(app.authorizer.check_permission(token, Capability::HubShare));
    assert!(!app.authorizer.check_permission(token, Capability::Donors));
}

#[tokio::test]
async fn test_hospital_receiver_login_end_to_end() {
    let app = TestApp::new();

    let response = app
        .auth
        .authenticate("maria.garcia", "123456")
        .await
        .unwrap();
    let info = &response.user_info;
    assert_eq!(info.role, Role::HospitalReceiver);
    assert_eq!(info.organization, "Hospital San Juan");

    // No distribution or admin section for a receiver.
    let menu = app.menu.build_menu(&info.session_token);
    let sections: Vec<&str> = menu.iter().map(|s| s.section.as_str()).collect();
    assert_eq!(sections, vec!["reception", "hub"]);

    assert!(
        app.authorizer
            .check_permission(&info.session_token, Capability::Requests)
    );
    assert!(
        !app.authorizer
            .check_permission(&info.session_token, Capability::Inventory)
    );
}

#[tokio::test]
async fn test_failure_outcomes_are_distinct() {
    let app = TestApp::new();

    let err = app
        .auth
        .authenticate("carlos.rodriguez", "wrongpass")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(err.message(), "Contraseña incorrecta");

    let err = app.auth.authenticate("ghost", "anything").await.unwrap_err();
    assert!(matches!(err, AuthError::UserNotFound));
    assert_eq!(err.message(), "Usuario no encontrado");
}

#[tokio::test]
async fn test_disabled_account_wins_over_credential_check() {
    let app = TestApp::new();
    app.create_test_account("dormant", "secret99", Role::Bank, false);

    // Correct and incorrect passwords both report the disabled account,
    // never the credential mismatch.
    for password in ["secret99", "not-the-password"] {
        let err = app.auth.authenticate("dormant", password).await.unwrap_err();
        assert!(matches!(err, AuthError::AccountDisabled));
        assert_eq!(err.message(), "Usuario desactivado");
    }
}

#[tokio::test]
async fn test_no_session_is_created_on_failure() {
    let app = TestApp::new();

    let _ = app.auth.authenticate("carlos.rodriguez", "wrongpass").await;
    let _ = app.auth.authenticate("ghost", "anything").await;

    assert!(app.session_store.is_empty());

    // Failed attempts leave last_login untouched as well.
    let carlos = app
        .directory
        .find_account("carlos.rodriguez")
        .await
        .unwrap()
        .unwrap();
    assert!(carlos.last_login_at.is_none());
}

#[tokio::test]
async fn test_successful_login_records_last_login() {
    let app = TestApp::new();

    app.login("ana.lopez", "hospital456").await;

    let ana = app
        .directory
        .find_account("ana.lopez")
        .await
        .unwrap()
        .unwrap();
    assert!(ana.last_login_at.is_some());
}

#[tokio::test]
async fn test_each_login_issues_a_distinct_token() {
    let app = TestApp::new();

    let first = app.login("admin", "admin2025").await;
    let second = app.login("admin", "admin2025").await;

    assert_ne!(first, second);
    // Both sessions are live simultaneously.
    assert!(app.authorizer.check_permission(&first, Capability::Users));
    assert!(app.authorizer.check_permission(&second, Capability::Users));
}
