//! Integration tests for menu derivation and its wire shape.

use bludee_entity::user::Role;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_bank_menu_sections_and_items() {
    let app = TestApp::new();
    let token = app.login("carlos.rodriguez", "banco123").await;

    let menu = app.menu.build_menu(&token);
    let sections: Vec<&str> = menu.iter().map(|s| s.section.as_str()).collect();
    // BANK has no admin module; the other three sections are full.
    assert_eq!(sections, vec!["distribution", "reception", "hub"]);

    let distribution_ids: Vec<&str> = menu[0].items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        distribution_ids,
        vec!["inventory", "processing", "dispatch", "donors"]
    );

    let hub_ids: Vec<&str> = menu[2].items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(hub_ids, vec!["hub-search", "hub-share", "transfers"]);
}

#[tokio::test]
async fn test_full_bank_hospital_menu_drops_hub_share() {
    let app = TestApp::new();
    let token = app.login("ana.lopez", "hospital456").await;

    let menu = app.menu.build_menu(&token);
    let sections: Vec<&str> = menu.iter().map(|s| s.section.as_str()).collect();
    assert_eq!(sections, vec!["distribution", "reception", "hub"]);

    let hub_ids: Vec<&str> = menu[2].items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(hub_ids, vec!["hub-search", "transfers"]);
}

#[tokio::test]
async fn test_menu_wire_shape() {
    let app = TestApp::new();
    let token = app.login("maria.garcia", "123456").await;

    let menu = app.menu.build_menu(&token);
    let json = serde_json::to_value(&menu).unwrap();

    assert_eq!(json[0]["section"], "reception");
    assert_eq!(json[0]["title"], "🏥 Módulo Recepción");
    assert_eq!(json[0]["items"][0]["id"], "requests");
    assert_eq!(json[0]["items"][0]["name"], "Solicitudes");
    assert_eq!(json[0]["items"][0]["icon"], "📋");
    assert_eq!(json[1]["items"][0]["id"], "hub-search");
    assert_eq!(json[1]["items"][0]["name"], "Buscar Componentes");
}

#[test]
fn test_menu_sections_are_never_emitted_empty() {
    let app = TestApp::new();

    for role in Role::ALL {
        let token = format!("menu-{role}");
        app.plant_session(&token, role, chrono::Duration::hours(1));

        for section in app.menu.build_menu(&token) {
            assert!(
                !section.items.is_empty(),
                "role {role} emitted empty section {}",
                section.section
            );
        }
    }
}
