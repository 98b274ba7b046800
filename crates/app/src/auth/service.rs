//! Auth service.

use async_trait::async_trait;
use dashmap::DashSet;
use mockall::automock;
use tracing::{info, warn};

use crate::auth::{AuthServiceError, generate_session_token, hash_secret};

/// What a request presented to the admin gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminCredentials {
    /// Session token from `Authorization: Bearer` or `x-admin-token`
    pub token: Option<String>,

    /// Shared password from `x-admin-pass`
    pub password: Option<String>,
}

/// Password login with in-memory sessions.
///
/// Sessions never expire; they end on logout or restart.
#[derive(Debug, Default)]
pub struct SessionAuthService {
    password_hash: Option<String>,
    sessions: DashSet<String>,
}

impl SessionAuthService {
    /// A blank or missing password disables password login entirely.
    #[must_use]
    pub fn new(password: Option<&str>) -> Self {
        let password_hash = password
            .filter(|password| !password.is_empty())
            .map(hash_secret);

        if password_hash.is_none() {
            warn!("ADMIN_PASSWORD not set, admin login is disabled");
        }

        Self {
            password_hash,
            sessions: DashSet::new(),
        }
    }

    fn password_matches(&self, password: &str) -> bool {
        self.password_hash
            .as_deref()
            .is_some_and(|expected| expected == hash_secret(password))
    }
}

#[async_trait]
impl AuthService for SessionAuthService {
    async fn login(&self, password: &str) -> Result<String, AuthServiceError> {
        if self.password_hash.is_none() {
            return Err(AuthServiceError::Disabled);
        }

        if !self.password_matches(password) {
            warn!("admin login rejected");

            return Err(AuthServiceError::InvalidPassword);
        }

        let token = generate_session_token();

        self.sessions.insert(hash_secret(&token));

        info!(sessions = self.sessions.len(), "admin logged in");

        Ok(token)
    }

    async fn logout(&self, token: &str) -> bool {
        self.sessions.remove(&hash_secret(token)).is_some()
    }

    async fn authorize(&self, credentials: &AdminCredentials) -> bool {
        if let Some(token) = credentials.token.as_deref()
            && self.sessions.contains(&hash_secret(token))
        {
            return true;
        }

        credentials
            .password
            .as_deref()
            .is_some_and(|password| self.password_matches(password))
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchanges the admin password for a new session token.
    async fn login(&self, password: &str) -> Result<String, AuthServiceError>;

    /// Ends a session. Returns `true` if the token was live.
    async fn logout(&self, token: &str) -> bool;

    /// Whether the credentials open the admin gate.
    async fn authorize(&self, credentials: &AdminCredentials) -> bool;
}
