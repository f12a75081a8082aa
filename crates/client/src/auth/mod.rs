//! Authentication session state machine.
//!
//! The session moves through `Checking -> Authenticated | NotAuthenticated`,
//! driven by:
//!
//! - app start: a silent check is attempted only when a token is stored
//! - explicit login or registration
//! - explicit logout
//! - an optional periodic re-check ([`AuthService::spawn_periodic_check`])
//!
//! On any backend rejection the stored token is cleared and the state lands
//! in `NotAuthenticated`. This boundary never returns `Err`: callers always
//! receive a discriminated [`AuthOutcome`], not an exception.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use pawmart_core::UserRole;

use crate::api::auth::{AuthApi, AuthBackend};
use crate::api::ApiClient;
use crate::error::ApiError;
use crate::token::TokenStore;
use crate::types::{AuthSession, User};

/// Current session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// A silent check is in flight (also the initial state).
    Checking,
    /// The backend accepted the session.
    Authenticated(User),
    /// No session, or the backend rejected the last one.
    NotAuthenticated,
}

/// Discriminated result of an auth operation.
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    /// The operation produced a live session.
    Authenticated {
        user: User,
    },
    /// The operation was rejected; `message` is user-facing.
    Denied {
        message: String,
    },
}

impl AuthOutcome {
    /// The authenticated user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user } => Some(user),
            Self::Denied { .. } => None,
        }
    }

    /// Whether the operation produced a live session.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// Whether the user may use the admin console.
#[must_use]
pub fn is_admin(user: &User) -> bool {
    user.roles.contains(&UserRole::Admin)
}

// =============================================================================
// AuthService
// =============================================================================

/// Session state machine over the auth endpoints.
#[derive(Clone)]
pub struct AuthService<B = AuthApi> {
    backend: B,
    tokens: Arc<dyn TokenStore>,
    state: Arc<RwLock<AuthState>>,
}

impl AuthService<AuthApi> {
    /// Create an auth service over the shared API client.
    #[must_use]
    pub fn from_client(api: ApiClient) -> Self {
        let tokens = api.tokens();
        Self::new(AuthApi::new(api), tokens)
    }
}

impl<B: AuthBackend> AuthService<B> {
    /// Create an auth service with an explicit backend and token store.
    #[must_use]
    pub fn new(backend: B, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            backend,
            tokens,
            state: Arc::new(RwLock::new(AuthState::Checking)),
        }
    }

    /// Current session state.
    pub async fn state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    /// Log in with email and password.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        match self.backend.login(email, password).await {
            Ok(session) => self.accept(session).await,
            Err(e) => self.reject(&e, "Wrong email or password").await,
        }
    }

    /// Register a new account; a successful registration signs in.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn register(&self, email: &str, password: &str, full_name: &str) -> AuthOutcome {
        match self.backend.register(email, password, full_name).await {
            Ok(session) => self.accept(session).await,
            Err(e) => self.reject(&e, "Registration was rejected").await,
        }
    }

    /// Silently re-validate the stored session.
    ///
    /// Without a stored token no request is made; the existence of a token
    /// is the sole signal that a silent check is worth attempting. A
    /// successful check rotates the stored token.
    #[instrument(skip(self))]
    pub async fn check_auth_status(&self) -> AuthOutcome {
        if self.tokens.load().is_none() {
            debug!("no stored token, skipping silent check");
            *self.state.write().await = AuthState::NotAuthenticated;
            return AuthOutcome::Denied {
                message: "No stored session".to_owned(),
            };
        }

        *self.state.write().await = AuthState::Checking;
        match self.backend.check_status().await {
            Ok(session) => self.accept(session).await,
            Err(e) => self.reject(&e, "Session expired, please sign in again").await,
        }
    }

    /// End the session: clear the stored token and the state.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        if let Err(e) = self.tokens.clear() {
            warn!(error = %e, "failed to clear stored token");
        }
        *self.state.write().await = AuthState::NotAuthenticated;
    }

    async fn accept(&self, session: AuthSession) -> AuthOutcome {
        if let Err(e) = self.tokens.save(&session.token) {
            warn!(error = %e, "failed to persist session token");
        }
        *self.state.write().await = AuthState::Authenticated(session.user.clone());
        AuthOutcome::Authenticated { user: session.user }
    }

    /// Handle a backend rejection: the stored token is cleared even when it
    /// existed before the call, and the state lands in `NotAuthenticated`.
    async fn reject(&self, error: &ApiError, unauthorized_message: &str) -> AuthOutcome {
        if let Err(e) = self.tokens.clear() {
            warn!(error = %e, "failed to clear stored token");
        }
        *self.state.write().await = AuthState::NotAuthenticated;

        let message = match error {
            ApiError::Unauthorized(_) => unauthorized_message.to_owned(),
            other => other.to_string(),
        };
        debug!(message = %message, "auth operation denied");
        AuthOutcome::Denied { message }
    }
}

impl<B> AuthService<B>
where
    B: AuthBackend + Clone + Send + Sync + 'static,
{
    /// Spawn a task that re-runs the silent check on an interval.
    ///
    /// The first check fires after one full interval, not immediately;
    /// callers run [`AuthService::check_auth_status`] themselves at startup.
    pub fn spawn_periodic_check(&self, interval: Duration) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // the first tick of a tokio interval completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                service.check_auth_status().await;
            }
        })
    }
}
