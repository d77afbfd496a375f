// src/core/gate.rs
use log::{error, info, warn};

use crate::core::auth::{AuthContext, AuthManager, Result as AuthResult};
use crate::core::config::Config;
use crate::core::store::{CredentialStore, StoreError};
use crate::error::{AppError, Result};
use crate::utils;

/// Shared application state: the credential store plus live sessions.
pub struct Gate {
    store: CredentialStore,
    pub auth_manager: AuthManager,
}

impl Gate {
    pub fn new(store: CredentialStore, auth_manager: AuthManager) -> Self {
        Self {
            store,
            auth_manager,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let secret = config
            .jwt_secret
            .clone()
            .unwrap_or_else(utils::generate_secret);
        let duration = chrono::Duration::from_std(config.session_duration)
            .unwrap_or_else(|_| chrono::Duration::hours(1));

        Self::new(
            CredentialStore::new(config.users_file.clone()),
            AuthManager::new(secret, duration),
        )
    }

    #[cfg(test)]
    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn login(&self, username: &str, password: &str) -> AuthResult<String> {
        self.auth_manager.authenticate(&self.store, username, password)
    }

    pub fn register(&self, username: &str, password: &str, confirmation: &str) -> Result<()> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::Validation("Please fill in all fields".to_string()));
        }
        if password != confirmation {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        self.store.register(username, password).map_err(|e| {
            warn!("Registration of '{}' rejected: {}", username, e);
            AppError::from(e)
        })
    }

    pub fn logout(&self, ctx: &AuthContext) {
        if self.auth_manager.clear_session(&ctx.session_id) {
            info!("User '{}' logged out", ctx.username);
        }
    }

    /// Usernames in file order. Read failures collapse into a single
    /// descriptive entry instead of an error.
    pub fn list_usernames(&self) -> Vec<String> {
        match self.store.list_usernames() {
            Ok(users) => users,
            Err(StoreError::NotFound(path)) => {
                warn!("User store {} not found", path.display());
                vec!["User store not found".to_string()]
            }
            Err(e) => {
                error!("Failed to read user store: {}", e);
                vec![format!("Failed to read user store: {}", e)]
            }
        }
    }
}
