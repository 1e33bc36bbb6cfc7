//! Centralized error handling.
//!
//! Provides a unified error type for the whole crate. Validation and
//! not-found errors are expected outcomes and carry a user-facing message;
//! conflicts are retryable by the caller; consistency errors signal an
//! invariant breach that must not be retried automatically.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Bad or missing input
    #[error("{0}")]
    Validation(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    // Lookup miss; payload names the entity
    #[error("{0} not found")]
    NotFound(&'static str),

    // Duplicate key, unique-index collision, duplicate pending request,
    // room already rented, request not pending. Retryable.
    #[error("{0}")]
    Conflict(String),

    // Invariant breach observed at runtime. Never retried automatically.
    #[error("inconsistent state: {0}")]
    Consistency(String),

    #[error("database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the caller may re-fetch and retry the operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Conflict(_))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &'static str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &'static str) -> AppResult<T> {
        self.ok_or(AppError::NotFound(entity))
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    /// Build a consistency error, logging it at error level on the way out.
    pub fn consistency(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::error!("consistency violation: {}", msg);
        AppError::Consistency(msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
