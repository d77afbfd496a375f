// src/core/auth.rs
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::core::store::{CredentialStore, StoreError};

// Define JWT claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    // Subject (username)
    pub sub: String,
    // Issued at
    pub iat: i64,
    // Expiration time
    pub exp: i64,
    // Session ID
    pub sid: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Session expired")]
    SessionExpired,

    #[error("Invalid session")]
    InvalidSession,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, AuthError>;

/// The authenticated caller, handed explicitly to every operation that
/// needs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub username: String,
    pub session_id: String,
}

pub struct AuthManager {
    jwt_secret: String,
    session_duration: Duration,
    // session id -> expiry (unix seconds)
    sessions: RwLock<HashMap<String, i64>>,
}

impl AuthManager {
    pub fn new(jwt_secret: String, session_duration: Duration) -> Self {
        Self {
            jwt_secret,
            session_duration,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Check the credentials against the store and open a session.
    pub fn authenticate(
        &self,
        store: &CredentialStore,
        username: &str,
        password: &str,
    ) -> Result<String> {
        if !store.verify(username, password)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issue_token(username)?;
        info!("User '{}' logged in", username);
        Ok(token)
    }

    fn issue_token(&self, username: &str) -> Result<String> {
        let session_id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.session_duration)
            .ok_or(AuthError::InvalidSession)?;

        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            sid: session_id.clone(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )?;

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        sessions.retain(|_, exp| *exp > now.timestamp());
        sessions.insert(session_id, claims.exp);

        Ok(token)
    }

    /// Drop every session whose token has expired.
    pub fn prune_expired(&self) -> usize {
        let now = Utc::now().timestamp();
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, exp| *exp > now);
        let pruned = before - sessions.len();
        if pruned > 0 {
            debug!("Pruned {} expired session(s)", pruned);
        }
        pruned
    }

    // Validate JWT token and return the caller it belongs to
    pub fn validate_token(&self, token: &str) -> Result<AuthContext> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| {
            if matches!(e.kind(), ErrorKind::ExpiredSignature) {
                self.prune_expired();
                AuthError::SessionExpired
            } else {
                AuthError::JwtError(e)
            }
        })?;

        let claims = token_data.claims;

        let live = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&claims.sid);
        if !live {
            return Err(AuthError::InvalidSession);
        }

        Ok(AuthContext {
            username: claims.sub,
            session_id: claims.sid,
        })
    }

    /// Forget a session. Returns whether it was live.
    pub fn clear_session(&self, session_id: &str) -> bool {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session_id)
            .is_some();
        debug!("Cleared session {} (was live: {})", session_id, removed);
        removed
    }
}
