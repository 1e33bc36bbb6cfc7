//! Authentication service - registration, login and the session lifecycle.
//!
//! Owns the single-slot session holder: a session is created at login,
//! replaced by the next login, and destroyed at logout or process exit.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{normalize_email, RegisterUser, Session, SessionHolder, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user. Does not start a session.
    async fn register(&self, details: RegisterUser) -> AppResult<User>;

    /// Check credentials: the user, or None when email or password
    /// does not match. Email matching is case-insensitive.
    async fn verify(&self, email: &str, password: &str) -> AppResult<Option<User>>;

    /// Verify credentials and start a session, replacing any existing one.
    async fn login(&self, email: &str, password: &str) -> AppResult<Session>;

    /// Destroy the current session, if any.
    fn logout(&self);

    /// Snapshot of the logged-in identity, if any.
    fn session(&self) -> Option<Session>;

    fn is_logged_in(&self) -> bool;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    sessions: SessionHolder,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self {
            uow,
            sessions: SessionHolder::new(),
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, details: RegisterUser) -> AppResult<User> {
        details.validate()?;

        let email = normalize_email(&details.email);
        if self.uow.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("email already registered"));
        }

        // Stored as given; login is an exact string comparison. The unique
        // email index backs up the existence check above.
        let user = User::new(details.name, &email, details.password, details.avatar);
        self.uow.users().insert(&user).await
    }

    async fn verify(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let user = self
            .uow
            .users()
            .find_by_email(&normalize_email(email))
            .await?;

        Ok(user.filter(|u| u.password == password))
    }

    async fn login(&self, email: &str, password: &str) -> AppResult<Session> {
        match self.verify(email, password).await? {
            Some(user) => {
                let session = Session::from(&user);
                self.sessions.set(session.clone());
                tracing::info!(email = %session.email, "session started");
                Ok(session)
            }
            None => Err(AppError::InvalidCredentials),
        }
    }

    fn logout(&self) {
        self.sessions.clear();
    }

    fn session(&self) -> Option<Session> {
        self.sessions.get()
    }

    fn is_logged_in(&self) -> bool {
        self.sessions.is_logged_in()
    }
}
