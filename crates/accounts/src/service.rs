//! Account service: login and registration with an explicit demo path.
//!
//! The original storefront called a backend that does not exist, caught the
//! failure, toasted an error, and then fabricated a successful login anyway.
//! That fallback is redesigned here as configuration: `AuthMode::Demo`
//! synthesizes the user record on backend failure and reports both the
//! failure notice and the success to the caller, while `AuthMode::Backend`
//! propagates the error like a real deployment would.

use thiserror::Error;

use ecocart_core::UserId;

use crate::user::UserProfile;

/// Account backend failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The backend could not be reached (or does not exist).
    #[error("account backend unavailable")]
    Unavailable,

    /// The backend rejected the credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The backend rejected the request for another reason.
    #[error("rejected: {0}")]
    Rejected(String),
}

/// How the account service treats backend failures.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Propagate backend errors to the caller.
    Backend,
    /// Fall back to a synthesized session on backend failure.
    #[default]
    Demo,
}

/// Boundary to whatever authenticates users.
pub trait AuthBackend {
    fn login(&self, email: &str, password: &str) -> Result<UserProfile, AuthError>;
    fn register(&self, name: &str, email: &str, password: &str) -> Result<(), AuthError>;
}

/// Backend stand-in for the storefront's nonexistent API: every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableBackend;

impl AuthBackend for UnavailableBackend {
    fn login(&self, _email: &str, _password: &str) -> Result<UserProfile, AuthError> {
        Err(AuthError::Unavailable)
    }

    fn register(&self, _name: &str, _email: &str, _password: &str) -> Result<(), AuthError> {
        Err(AuthError::Unavailable)
    }
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The backend authenticated the user.
    Authenticated(UserProfile),
    /// The backend failed; demo mode synthesized a session. The error is
    /// carried so the host can still show the transient failure notice.
    DemoFallback {
        user: UserProfile,
        backend_error: AuthError,
    },
}

impl LoginOutcome {
    pub fn user(&self) -> &UserProfile {
        match self {
            LoginOutcome::Authenticated(user) => user,
            LoginOutcome::DemoFallback { user, .. } => user,
        }
    }
}

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered,
    /// The backend failed; demo mode reports success regardless.
    DemoFallback { backend_error: AuthError },
}

/// Login/registration front door for the composition root.
#[derive(Debug, Clone)]
pub struct AccountService<B> {
    backend: B,
    mode: AuthMode,
}

impl<B: AuthBackend> AccountService<B> {
    pub fn new(backend: B, mode: AuthMode) -> Self {
        Self { backend, mode }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        match self.backend.login(email, password) {
            Ok(user) => Ok(LoginOutcome::Authenticated(user)),
            Err(err) => match self.mode {
                AuthMode::Backend => Err(err),
                AuthMode::Demo => {
                    tracing::warn!(error = %err, "login backend failed, using demo session");
                    Ok(LoginOutcome::DemoFallback {
                        user: demo_user(email),
                        backend_error: err,
                    })
                }
            },
        }
    }

    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterOutcome, AuthError> {
        match self.backend.register(name, email, password) {
            Ok(()) => Ok(RegisterOutcome::Registered),
            Err(err) => match self.mode {
                AuthMode::Backend => Err(err),
                AuthMode::Demo => {
                    tracing::warn!(error = %err, "register backend failed, reporting success anyway");
                    Ok(RegisterOutcome::DemoFallback { backend_error: err })
                }
            },
        }
    }
}

/// Synthesized user for demo-mode sessions.
///
/// Keeps the submitted email so the profile page still looks personal.
fn demo_user(email: &str) -> UserProfile {
    UserProfile {
        id: UserId::new(),
        name: "Demo User".to_string(),
        email: email.to_string(),
    }
}
