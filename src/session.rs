//! Session store - owns the authenticated identity and its token
//!
//! The session token is mirrored into durable storage so it survives
//! restarts; everything else lives in memory. Auth and network failures
//! collapse into one user-facing category, with the underlying detail kept
//! in the log.

use crate::error::{ErrorKind, Result};
use crate::interface::AuthApi;
use crate::model::{AuthSession, Credentials, ProfilePatch, RegisterForm, User};
use crate::storage::TokenStore;

/// The single user-facing failure category for login and register.
pub const AUTH_FAILED: &str = "authentication failed";

/// Authenticated is the only variant carrying a user and a token, so the two
/// are present exactly when the session is authenticated.
#[derive(Debug, Clone)]
pub enum Session {
    Anonymous,
    Authenticating,
    Authenticated { user: User, token: String },
    Failed { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Anonymous,
    Authenticating,
    Authenticated,
    Error,
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        match self {
            Session::Anonymous => SessionStatus::Anonymous,
            Session::Authenticating => SessionStatus::Authenticating,
            Session::Authenticated { .. } => SessionStatus::Authenticated,
            Session::Failed { .. } => SessionStatus::Error,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Session::Failed { message } => Some(message),
            _ => None,
        }
    }
}

pub struct SessionStore<A, S> {
    gateway: A,
    tokens: S,
    session: Session,
}

impl<A, S> SessionStore<A, S>
where
    A: AuthApi,
    S: TokenStore,
{
    /// Starts unresolved; `restore_session` settles the initial state, and
    /// the route guard renders a loading view until it does.
    pub fn new(gateway: A, tokens: S) -> Self {
        SessionStore {
            gateway,
            tokens,
            session: Session::Authenticating,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    /// Exchange credentials for a session. Empty-input validation is the
    /// caller's job; any previous session is cleared by the attempt.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        self.session = Session::Authenticating;
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        match self.gateway.login(&credentials).await {
            Ok(auth) => {
                self.install(auth);
                Ok(())
            }
            Err(err) => {
                log::warn!("login failed: {err:?}");
                self.session = Session::Failed {
                    message: AUTH_FAILED.to_string(),
                };
                Err(err)
            }
        }
    }

    /// Create an account; same transition shape as `login`. A confirmation
    /// mismatch is rejected locally, without contacting the gateway or
    /// disturbing the current session.
    pub async fn register(&mut self, form: &RegisterForm) -> Result<()> {
        if form.password != form.confirm_password {
            return Err(ErrorKind::ValidationError("passwords do not match".to_string()).into());
        }

        self.session = Session::Authenticating;
        match self.gateway.register(form).await {
            Ok(auth) => {
                self.install(auth);
                Ok(())
            }
            Err(err) => {
                log::warn!("registration failed: {err:?}");
                self.session = Session::Failed {
                    message: AUTH_FAILED.to_string(),
                };
                Err(err)
            }
        }
    }

    fn install(&mut self, auth: AuthSession) {
        if let Err(err) = self.tokens.save(&auth.token) {
            // the durable mirror is best-effort; the live session stands
            log::warn!("failed to persist session token: {err:?}");
        }
        self.gateway.set_token(Some(auth.token.clone()));
        self.session = Session::Authenticated {
            user: auth.user,
            token: auth.token,
        };
    }

    /// Clear the session everywhere. Safe to call when already anonymous.
    pub async fn logout(&mut self) {
        if self.session.is_authenticated() {
            // best-effort server-side invalidation
            if let Err(err) = self.gateway.logout().await {
                log::debug!("server logout failed: {err:?}");
            }
        }
        if let Err(err) = self.tokens.clear() {
            log::warn!("failed to clear stored token: {err:?}");
        }
        self.gateway.set_token(None);
        self.session = Session::Anonymous;
    }

    /// Resolve the startup session from durable storage. Without a stored
    /// token this settles to anonymous without touching the gateway; with
    /// one, the token is only kept if the server still accepts it.
    pub async fn restore_session(&mut self) {
        let stored = match self.tokens.load() {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!("token storage unreadable: {err:?}");
                None
            }
        };
        let Some(token) = stored else {
            self.session = Session::Anonymous;
            return;
        };

        self.session = Session::Authenticating;
        self.gateway.set_token(Some(token.clone()));
        match self.gateway.current_user().await {
            Ok(user) => {
                self.session = Session::Authenticated { user, token };
            }
            Err(err) => {
                log::warn!("stored session rejected: {err:?}");
                if let Err(err) = self.tokens.clear() {
                    log::warn!("failed to clear stale token: {err:?}");
                }
                self.gateway.set_token(None);
                self.session = Session::Anonymous;
            }
        }
    }

    /// Replace the profile of the signed-in user.
    pub async fn update_profile(&mut self, patch: &ProfilePatch) -> Result<()> {
        if !self.session.is_authenticated() {
            return Err(ErrorKind::AuthError("not signed in".to_string()).into());
        }
        let user = self.gateway.update_profile(patch).await?;
        if let Session::Authenticated { user: slot, .. } = &mut self.session {
            *slot = user;
        }
        Ok(())
    }

    pub async fn change_password(&mut self, current: &str, new: &str) -> Result<()> {
        if !self.session.is_authenticated() {
            return Err(ErrorKind::AuthError("not signed in".to_string()).into());
        }
        self.gateway.change_password(current, new).await
    }
}
