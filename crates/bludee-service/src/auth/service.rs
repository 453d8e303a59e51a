//! Authentication service — login, logout, session info flows.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use bludee_auth::directory::UserDirectory;
use bludee_auth::error::AuthError;
use bludee_auth::password::PasswordHasher;
use bludee_auth::rbac::RoleRegistry;
use bludee_auth::session::SessionStore;
use bludee_auth::token::TokenGenerator;
use bludee_core::config::session::SessionConfig;
use bludee_entity::session::Session;

use super::response::{LoginResponse, UserInfo};

/// Outcome message for a successful login. Part of the client contract.
const LOGIN_SUCCESS_MESSAGE: &str = "Login exitoso";

/// Orchestrates credential verification and session issuance.
#[derive(Clone)]
pub struct AuthService {
    /// User account lookup and login bookkeeping.
    directory: Arc<dyn UserDirectory>,
    /// Live sessions.
    session_store: Arc<SessionStore>,
    /// Credential hashing.
    password_hasher: Arc<PasswordHasher>,
    /// Session token generation.
    token_generator: TokenGenerator,
    /// Role-to-capability tables.
    registry: RoleRegistry,
    /// Session lifetime settings.
    session_config: SessionConfig,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("session_config", &self.session_config)
            .finish()
    }
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        session_store: Arc<SessionStore>,
        password_hasher: Arc<PasswordHasher>,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            directory,
            session_store,
            password_hasher,
            token_generator: TokenGenerator::new(),
            registry: RoleRegistry::new(),
            session_config,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Look up the account
    /// 2. Check the account is active
    /// 3. Verify the password
    /// 4. Record the login time and issue a session
    ///
    /// The first failing check wins; the three credential failures are
    /// distinct outcomes with distinct messages. No session is created
    /// and no account state changes on any failure path.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, AuthError> {
        // Step 1: Find the account
        let account = self
            .directory
            .find_account(username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // Step 2: Check account status
        if !account.active {
            warn!(username = %username, "Login rejected for deactivated account");
            return Err(AuthError::AccountDisabled);
        }

        // Step 3: Verify password
        let password_valid = self
            .password_hasher
            .verify_password(password, &account.password_hash)?;

        if !password_valid {
            warn!(username = %username, "Login rejected for invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        // Step 4: Record login and issue the session
        let now = Utc::now();
        self.directory.record_login(username, now).await?;

        let mut token = self.token_generator.generate();
        while self.session_store.contains(&token) {
            token = self.token_generator.generate();
        }

        let expires_at = now + self.session_config.lifetime();
        let session = Session {
            token: token.clone(),
            username: account.username.clone(),
            role: account.role,
            organization: account.organization.clone(),
            login_at: now,
            expires_at,
        };
        self.session_store.insert(session);

        info!(
            username = %account.username,
            role = %account.role,
            expires_at = %expires_at,
            "Login successful"
        );

        Ok(LoginResponse {
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
            user_info: UserInfo {
                username: account.username,
                name: account.display_name,
                role: account.role,
                organization: account.organization,
                email: account.email,
                session_token: token,
                capabilities: self.registry.capabilities(account.role).to_vec(),
                modules: self.registry.modules(account.role).to_vec(),
            },
        })
    }

    /// Removes the session, returning whether one was present.
    ///
    /// Safe to call repeatedly; a second call simply returns `false`.
    pub fn logout(&self, token: &str) -> bool {
        let removed = self.session_store.remove(token);
        if removed {
            info!("Session closed by logout");
        }
        removed
    }

    /// Returns the live session for the token, if any.
    ///
    /// An expired session is evicted and reported as absent, the same
    /// lazy-eviction behavior permission checks have.
    pub fn session_info(&self, token: &str) -> Option<Session> {
        self.session_store.find_live(token)
    }
}
