//! Shared test helpers for integration tests.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use bludee_auth::directory::{InMemoryDirectory, UserDirectory};
use bludee_auth::password::PasswordHasher;
use bludee_auth::rbac::Authorizer;
use bludee_auth::session::SessionStore;
use bludee_core::config::session::SessionConfig;
use bludee_entity::session::Session;
use bludee_entity::user::{Role, UserAccount};
use bludee_service::{AuthService, MenuService};

/// Test application context wired with the seeded demo directory.
pub struct TestApp {
    /// The seeded user directory.
    pub directory: Arc<InMemoryDirectory>,
    /// The shared session store.
    pub session_store: Arc<SessionStore>,
    /// Credential hasher (default scheme).
    pub password_hasher: Arc<PasswordHasher>,
    /// Authentication service.
    pub auth: AuthService,
    /// Permission checks.
    pub authorizer: Authorizer,
    /// Menu derivation.
    pub menu: MenuService,
}

impl TestApp {
    /// Create a new test application with default configuration.
    pub fn new() -> Self {
        let password_hasher = Arc::new(PasswordHasher::default());
        let directory =
            Arc::new(InMemoryDirectory::seeded(&password_hasher).expect("Failed to seed directory"));
        let session_store = Arc::new(SessionStore::new());

        let auth = AuthService::new(
            Arc::clone(&directory) as Arc<dyn UserDirectory>,
            Arc::clone(&session_store),
            Arc::clone(&password_hasher),
            SessionConfig::default(),
        );
        let authorizer = Authorizer::new(Arc::clone(&session_store));
        let menu = MenuService::new(Arc::clone(&session_store));

        Self {
            directory,
            session_store,
            password_hasher,
            auth,
            authorizer,
            menu,
        }
    }

    /// Logs in and returns the issued session token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        self.auth
            .authenticate(username, password)
            .await
            .expect("Login should succeed")
            .user_info
            .session_token
    }

    /// Inserts a test account into the directory.
    pub fn create_test_account(&self, username: &str, password: &str, role: Role, active: bool) {
        let password_hash = self
            .password_hasher
            .hash_password(password)
            .expect("Failed to hash test password");

        self.directory.insert(UserAccount {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash,
            display_name: format!("Test {username}"),
            role,
            organization: "Test Org".to_string(),
            email: format!("{username}@test.pr"),
            active,
            created_at: Utc::now(),
            last_login_at: None,
        });
    }

    /// Plants a session with an explicit expiry, bypassing login.
    pub fn plant_session(&self, token: &str, role: Role, expires_in: Duration) -> Session {
        let now = Utc::now();
        let session = Session {
            token: token.to_string(),
            username: "planted".to_string(),
            role,
            organization: "Test Org".to_string(),
            login_at: now,
            expires_at: now + expires_in,
        };
        self.session_store.insert(session.clone());
        session
    }
}
