//! Session Manager: authentication state for the current page view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives only in memory. It starts anonymous, becomes
//! authenticated atomically on a complete login response, and is cleared
//! synchronously on logout. Signup never authenticates; it only surfaces the
//! login form.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use crate::api::{ApiClient, ApiError};
use crate::http::Transport;
use crate::store::{PendingGuard, Store};
use crate::types::{CreatedAccount, User};

/// Token and user held for the page lifetime.
///
/// `user` is present exactly when `token` is non-empty; the fields are private
/// so that invariant can only change through [`Session::authenticated`] and
/// [`Session::clear`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: String,
    user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Returns `None` for an empty token.
    #[must_use]
    pub fn authenticated(token: String, user: User) -> Option<Self> {
        if token.is_empty() {
            return None;
        }
        Some(Self {
            token,
            user: Some(user),
        })
    }

    /// Raw token string, exactly as the login endpoint returned it.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        (!self.token.is_empty()).then_some(self.token.as_str())
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn clear(&mut self) {
        self.token.clear();
        self.user = None;
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .field("user", &self.user)
            .finish()
    }
}

/// Which credential form is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthForm {
    #[default]
    Hidden,
    Login,
    Signup,
}

/// Session plus the credential form it is driven from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub form: AuthForm,
    pub email: String,
    pub password: String,
    pub loading: bool,
}

/// Why a login or signup did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Login was rejected. Wrong password and unknown account are not distinguished.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Login returned 2xx without both a token and a user.
    #[error("login response missing token or user")]
    IncompleteSession,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Drives [`AuthState`] through login, signup, and logout.
#[derive(Clone, Debug)]
pub struct SessionManager<T, S> {
    api: ApiClient<T>,
    store: S,
}

impl<T, S> SessionManager<T, S>
where
    T: Transport,
    S: Store<AuthState>,
{
    pub fn new(api: ApiClient<T>, store: S) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.store.read(|s| s.session.clone())
    }

    /// Authenticate and replace any existing session.
    ///
    /// On success the credential fields are cleared and the form is hidden.
    /// On failure the session and fields are left untouched.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidCredentials`] for any non-2xx status,
    /// [`SessionError::IncompleteSession`] for a 2xx body lacking token or user,
    /// and [`SessionError::Api`] for transport, decode, or disabled failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        self.store.write(|s| s.loading = true);
        let _pending = PendingGuard::new(&self.store, |s: &mut AuthState| s.loading = false);

        let resp = match self.api.login(email, password).await {
            Ok(resp) => resp,
            Err(ApiError::Rejected { status }) => {
                log::warn!("login rejected with status {status}");
                return Err(SessionError::InvalidCredentials);
            }
            Err(e) => {
                log::error!("login error: {e}");
                return Err(e.into());
            }
        };

        let session = match (resp.token, resp.user) {
            (Some(token), Some(user)) => Session::authenticated(token, user),
            _ => None,
        };
        let Some(session) = session else {
            log::warn!("login response missing token or user");
            return Err(SessionError::IncompleteSession);
        };
        let user = session.user().cloned().ok_or(SessionError::IncompleteSession)?;

        self.store.write(|s| {
            s.session = session;
            s.form = AuthForm::Hidden;
            s.email.clear();
            s.password.clear();
        });
        log::info!("logged in as {}", user.email);
        Ok(user)
    }

    /// Create an account without authenticating.
    ///
    /// On success the password is cleared and the login form is surfaced.
    ///
    /// # Errors
    ///
    /// [`SessionError::Api`] for any failed request.
    pub async fn signup(&self, email: &str, password: &str) -> Result<CreatedAccount, SessionError> {
        self.store.write(|s| s.loading = true);
        let _pending = PendingGuard::new(&self.store, |s: &mut AuthState| s.loading = false);

        let account = self.api.create_account(email, password).await.map_err(|e| {
            log::error!("signup error: {e}");
            SessionError::Api(e)
        })?;

        self.store.write(|s| {
            s.password.clear();
            s.form = AuthForm::Login;
        });
        log::info!("account created for {}", account.email);
        Ok(account)
    }

    /// Drop the token and user. No request is made.
    pub fn logout(&self) {
        self.store.write(|s| s.session.clear());
        log::info!("logged out");
    }

    pub fn show_login(&self) {
        self.store.write(|s| s.form = AuthForm::Login);
    }

    pub fn show_signup(&self) {
        self.store.write(|s| s.form = AuthForm::Signup);
    }

    pub fn hide_forms(&self) {
        self.store.write(|s| s.form = AuthForm::Hidden);
    }
}
