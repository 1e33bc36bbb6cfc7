//! User service - profile lookups and avatar updates.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{normalize_email, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get a user by email (case-insensitive)
    async fn get_by_email(&self, email: &str) -> AppResult<User>;

    /// Replace a user's avatar. Returns false when the user is absent.
    async fn update_photo(&self, email: &str, avatar: &str) -> AppResult<bool>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get_by_email(&self, email: &str) -> AppResult<User> {
        self.uow
            .users()
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or_not_found("user")
    }

    async fn update_photo(&self, email: &str, avatar: &str) -> AppResult<bool> {
        let Some(mut user) = self
            .uow
            .users()
            .find_by_email(&normalize_email(email))
            .await?
        else {
            tracing::warn!(email = %email, "avatar update for unknown user");
            return Ok(false);
        };

        user.avatar = Some(avatar.to_string());
        self.uow.users().update(&user).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockUserRepository;
    use crate::services::test_support::TestUnitOfWork;

    fn stored_user() -> User {
        User::new("Iker".into(), "iker@gmail.com", "3333".into(), None)
    }

    #[tokio::test]
    async fn get_by_email_normalizes_lookup() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .withf(|email| email == "iker@gmail.com")
            .returning(|_| Ok(Some(stored_user())));

        let service = UserManager::new(Arc::new(TestUnitOfWork::new().with_users(users)));
        let user = service.get_by_email(" Iker@Gmail.com ").await.unwrap();
        assert_eq!(user.email, "iker@gmail.com");
    }

    #[tokio::test]
    async fn get_by_email_misses_with_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(TestUnitOfWork::new().with_users(users)));
        let result = service.get_by_email("nobody@example.com").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound("user")));
    }

    #[tokio::test]
    async fn update_photo_returns_false_for_unknown_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users.expect_update().never();

        let service = UserManager::new(Arc::new(TestUnitOfWork::new().with_users(users)));
        assert!(!service.update_photo("nobody@example.com", "img").await.unwrap());
    }

    #[tokio::test]
    async fn update_photo_persists_the_new_avatar() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(stored_user())));
        users
            .expect_update()
            .withf(|user| user.avatar.as_deref() == Some("data:image/png;base64,xyz"))
            .returning(|user| Ok(user.clone()));

        let service = UserManager::new(Arc::new(TestUnitOfWork::new().with_users(users)));
        assert!(service
            .update_photo("iker@gmail.com", "data:image/png;base64,xyz")
            .await
            .unwrap());
    }
}
