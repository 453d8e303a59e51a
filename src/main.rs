//! Bludee demo — RBAC and session engine for blood-bank coordination.
//!
//! Entry point that wires the crates together and walks the demo login
//! scenario: seeded accounts, login attempts, per-role menus, and
//! permission probes.

use std::sync::Arc;

use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use bludee_auth::directory::{InMemoryDirectory, UserDirectory};
use bludee_auth::password::PasswordHasher;
use bludee_auth::rbac::Authorizer;
use bludee_auth::session::SessionStore;
use bludee_core::config::AppConfig;
use bludee_core::error::AppError;
use bludee_entity::permission::Capability;
use bludee_service::{AuthService, MenuService};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Demo error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("BLUDEE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(false).init();
        }
    }
}

/// Main demo run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Bludee v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Build the core components ────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new(config.auth.password_scheme));
    let directory = Arc::new(InMemoryDirectory::seeded(&password_hasher)?);
    let session_store = Arc::new(SessionStore::new());

    let auth_service = AuthService::new(
        Arc::clone(&directory) as Arc<dyn UserDirectory>,
        Arc::clone(&session_store),
        Arc::clone(&password_hasher),
        config.session.clone(),
    );
    let authorizer = Authorizer::new(Arc::clone(&session_store));
    let menu_service = MenuService::new(Arc::clone(&session_store));

    // ── Step 2: Show the seeded demo accounts ────────────────────
    let demo_users = [
        ("maria.garcia", "123456", "HOSPITAL_RECEIVER"),
        ("carlos.rodriguez", "banco123", "BANK"),
        ("ana.lopez", "hospital456", "HOSPITAL_FULL_BANK"),
        ("admin", "admin2025", "ADMIN"),
    ];
    for (username, password, role) in demo_users {
        tracing::info!(username, password, role, "Demo account");
    }

    // ── Step 3: Walk the login scenarios ─────────────────────────
    let attempts = [
        ("maria.garcia", "123456"),
        ("carlos.rodriguez", "contraseña_incorrecta"),
        ("usuario_inexistente", "123456"),
        ("admin", "admin2025"),
    ];

    let mut last_token = None;
    for (username, password) in attempts {
        tracing::info!(username, "Attempting login");

        match auth_service.authenticate(username, password).await {
            Ok(response) => {
                let info = &response.user_info;
                tracing::info!(
                    message = %response.message,
                    name = %info.name,
                    organization = %info.organization,
                    role = %info.role,
                    "Login succeeded"
                );

                for section in menu_service.build_menu(&info.session_token) {
                    let items: Vec<String> = section
                        .items
                        .iter()
                        .map(|item| format!("{} {}", item.icon, item.name))
                        .collect();
                    tracing::info!(title = %section.title, items = ?items, "Menu section");
                }

                for capability in [
                    Capability::Inventory,
                    Capability::Dispatch,
                    Capability::Donors,
                    Capability::Requests,
                    Capability::Users,
                ] {
                    let granted = authorizer.check_permission(&info.session_token, capability);
                    tracing::info!(capability = %capability, granted, "Permission probe");
                }

                last_token = Some(info.session_token.clone());
            }
            Err(e) => {
                tracing::info!(message = %e, "Login failed");
            }
        }
    }

    // ── Step 4: Session info and logout ──────────────────────────
    if let Some(token) = last_token {
        if let Some(session) = auth_service.session_info(&token) {
            tracing::info!(
                username = %session.username,
                remaining_minutes = session.remaining().num_minutes(),
                "Session info"
            );
        }

        tracing::info!(removed = auth_service.logout(&token), "Logout");
        tracing::info!(removed = auth_service.logout(&token), "Second logout");
    }

    Ok(())
}
