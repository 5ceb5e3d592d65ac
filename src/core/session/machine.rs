//! Session state machine
//!
//! The single owner of authentication state. It orchestrates persistence
//! ([`TokenStore`]), decoding ([`codec`]) and header binding
//! ([`RequestAuthorizer`]), and is the only writer of the latter two.
//!
//! ```text
//! Uninitialized --initialize--> Initializing --> Authenticated(User)
//!                                            \-> Unauthenticated
//! Authenticated <--login/logout--> Unauthenticated
//! ```

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::authorizer::RequestAuthorizer;
use super::backend::{Credentials, LoginBackend};
use super::codec::{self, User};
use super::error::SessionError;
use super::store::{SessionStorage, TokenStore};

/// Source of the current Unix time in seconds
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

/// Lifecycle position of the session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Nothing has been read from storage yet
    #[default]
    Uninitialized,
    /// Storage is being read
    Initializing,
    /// A valid session is active
    Authenticated(User),
    /// No session
    Unauthenticated,
}

/// Authentication state observed by the UI
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    pub status: SessionStatus,
    /// A login call is in flight
    pub loading: bool,
    /// Message from the last failed operation
    pub error: Option<String>,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match &self.status {
            SessionStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True once storage has been read; never goes back to false
    pub fn is_initialized(&self) -> bool {
        matches!(
            self.status,
            SessionStatus::Authenticated(_) | SessionStatus::Unauthenticated
        )
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.status, SessionStatus::Authenticated(_))
    }
}

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success(User),
    Failure { error: String },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoginOutcome::Success(_) => None,
            LoginOutcome::Failure { error } => Some(error),
        }
    }
}

fn system_clock() -> Clock {
    Arc::new(|| chrono::Utc::now().timestamp())
}

/// Process-wide session owner
///
/// Cloning yields another handle onto the same state.
pub struct SessionStateMachine<B> {
    state: Arc<RwLock<AuthState>>,
    store: TokenStore,
    authorizer: RequestAuthorizer,
    backend: Arc<B>,
    clock: Clock,
}

impl<B> Clone for SessionStateMachine<B> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            store: self.store.clone(),
            authorizer: self.authorizer.clone(),
            backend: Arc::clone(&self.backend),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<B> std::fmt::Debug for SessionStateMachine<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStateMachine")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl<B> SessionStateMachine<B> {
    pub fn new(backend: B, storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            state: Arc::new(RwLock::new(AuthState::default())),
            store: TokenStore::new(storage),
            authorizer: RequestAuthorizer::new(),
            backend: Arc::new(backend),
            clock: system_clock(),
        }
    }

    /// Replace the wall clock (tests)
    pub fn with_clock(mut self, clock: impl Fn() -> i64 + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AuthState {
        self.read().clone()
    }

    /// Read handle on the authorization slot, for request decoration
    pub fn authorizer(&self) -> RequestAuthorizer {
        self.authorizer.clone()
    }

    /// Rehydrate the session from storage
    ///
    /// Runs once; later calls return the current state untouched.
    pub fn initialize(&self) -> AuthState {
        {
            let mut state = self.write();
            if state.status != SessionStatus::Uninitialized {
                return state.clone();
            }
            state.status = SessionStatus::Initializing;
        }

        let (status, error) = match self.rehydrate() {
            Ok(Some(user)) => {
                tracing::info!(user_id = %user.user_id, role = %user.role, "Session restored");
                (SessionStatus::Authenticated(user), None)
            }
            Ok(None) => {
                tracing::debug!("No stored session");
                (SessionStatus::Unauthenticated, None)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Discarding stored session");
                self.store.clear();
                self.authorizer.unbind();
                (SessionStatus::Unauthenticated, Some(err.to_string()))
            }
        };

        let mut state = self.write();
        state.status = status;
        state.error = error;
        state.clone()
    }

    fn rehydrate(&self) -> Result<Option<User>, SessionError> {
        let Some(stored) = self.store.get() else {
            return Ok(None);
        };

        let claims = codec::decode(&stored.token)?;
        if codec::is_expired(&claims, (self.clock)()) {
            return Err(SessionError::ExpiredSession);
        }

        // Claims are authoritative; the stored record is a display cache
        let user = codec::to_user(&claims);
        if user != stored.user {
            tracing::debug!("Stored user record out of date, rewriting");
            self.store.set(&stored.token, &user);
        }

        self.authorizer.bind(&stored.token);
        Ok(Some(user))
    }

    /// End the session
    pub fn logout(&self) {
        self.authorizer.unbind();
        self.store.clear();

        let mut state = self.write();
        if state.is_initialized() {
            state.status = SessionStatus::Unauthenticated;
        }
        state.error = None;
        tracing::info!("Logged out");
    }

    pub fn clear_error(&self) {
        self.write().error = None;
    }

    fn read(&self) -> RwLockReadGuard<'_, AuthState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, AuthState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<B: LoginBackend> SessionStateMachine<B> {
    /// Exchange credentials for a session
    ///
    /// Never fails across this boundary: every error comes back as
    /// [`LoginOutcome::Failure`] and leaves the previous session intact.
    pub async fn login(&self, credentials: &Credentials) -> LoginOutcome {
        {
            let mut state = self.write();
            state.loading = true;
            state.error = None;
        }

        match self.authenticate(credentials).await {
            Ok(user) => {
                tracing::info!(user_id = %user.user_id, role = %user.role, "Logged in");
                let mut state = self.write();
                state.status = SessionStatus::Authenticated(user.clone());
                state.loading = false;
                LoginOutcome::Success(user)
            }
            Err(err) => {
                tracing::warn!(email = %credentials.email, error = %err, "Login failed");
                let error = err.to_string();
                let mut state = self.write();
                state.loading = false;
                state.error = Some(error.clone());
                LoginOutcome::Failure { error }
            }
        }
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<User, SessionError> {
        let response = self.backend.login(credentials).await?;

        let token = response
            .token
            .filter(|token| !token.is_empty())
            .ok_or(SessionError::Validation)?;

        let claims = codec::decode(&token)?;
        if codec::is_expired(&claims, (self.clock)()) {
            return Err(SessionError::ExpiredSession);
        }
        let user = codec::to_user(&claims);

        self.store.set(&token, &user);
        self.authorizer.bind(&token);
        Ok(user)
    }
}
