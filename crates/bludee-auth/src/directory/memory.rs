//! In-memory user directory for single-node and demo deployments.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use bludee_core::error::AppError;
use bludee_entity::user::{Role, UserAccount};

use crate::password::PasswordHasher;

use super::UserDirectory;

/// In-memory user directory backed by a concurrent map.
///
/// Suitable for single-node deployments only; a persisted directory
/// slots in behind the [`UserDirectory`] trait without contract change.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    /// Accounts keyed by username.
    accounts: DashMap<String, UserAccount>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Creates a directory seeded with the demo accounts.
    ///
    /// Credentials are hashed with the given hasher, so the seeded
    /// directory follows whatever digest scheme is configured.
    pub fn seeded(hasher: &PasswordHasher) -> Result<Self, AppError> {
        let directory = Self::new();

        directory.insert(UserAccount {
            id: Uuid::new_v4(),
            username: "maria.garcia".to_string(),
            password_hash: hasher.hash_password("123456")?,
            display_name: "Dra. María García".to_string(),
            role: Role::HospitalReceiver,
            organization: "Hospital San Juan".to_string(),
            email: "maria.garcia@hospitalsj.pr".to_string(),
            active: true,
            created_at: seed_date(2025, 1, 15)?,
            last_login_at: None,
        });

        directory.insert(UserAccount {
            id: Uuid::new_v4(),
            username: "carlos.rodriguez".to_string(),
            password_hash: hasher.hash_password("banco123")?,
            display_name: "Dr. Carlos Rodríguez".to_string(),
            role: Role::Bank,
            organization: "Banco Central PR".to_string(),
            email: "carlos@bancocentral.pr".to_string(),
            active: true,
            created_at: seed_date(2025, 1, 10)?,
            last_login_at: None,
        });

        directory.insert(UserAccount {
            id: Uuid::new_v4(),
            username: "ana.lopez".to_string(),
            password_hash: hasher.hash_password("hospital456")?,
            display_name: "Dra. Ana López".to_string(),
            role: Role::HospitalFullBank,
            organization: "Hospital Metropolitano".to_string(),
            email: "ana.lopez@hosmetro.pr".to_string(),
            active: true,
            created_at: seed_date(2025, 1, 20)?,
            last_login_at: None,
        });

        directory.insert(UserAccount {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            password_hash: hasher.hash_password("admin2025")?,
            display_name: "Administrador Sistema".to_string(),
            role: Role::Admin,
            organization: "Sistema Bludee".to_string(),
            email: "admin@bludee.pr".to_string(),
            active: true,
            created_at: seed_date(2025, 1, 1)?,
            last_login_at: None,
        });

        info!(accounts = directory.accounts.len(), "Seeded user directory");

        Ok(directory)
    }

    /// Inserts or replaces an account, keyed by its username.
    pub fn insert(&self, account: UserAccount) {
        self.accounts.insert(account.username.clone(), account);
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn find_account(&self, username: &str) -> Result<Option<UserAccount>, AppError> {
        Ok(self.accounts.get(username).map(|entry| entry.value().clone()))
    }

    async fn record_login(&self, username: &str, at: DateTime<Utc>) -> Result<(), AppError> {
        match self.accounts.get_mut(username) {
            Some(mut entry) => {
                entry.last_login_at = Some(at);
                Ok(())
            }
            None => Err(AppError::not_found(format!(
                "Cannot record login for unknown account '{username}'"
            ))),
        }
    }
}

/// Midnight UTC on a fixed seed date.
fn seed_date(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>, AppError> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or_else(|| AppError::internal(format!("Invalid seed date {year}-{month:02}-{day:02}")))
}
