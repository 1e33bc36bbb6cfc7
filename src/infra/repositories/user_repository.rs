//! User data access.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter};
use uuid::Uuid;

use crate::domain::User;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Emails are matched literally; callers normalize (trim + lowercase)
/// before handing them in.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by primary key
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user through the unique email index
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user; a colliding email surfaces as a conflict
    async fn insert(&self, user: &User) -> AppResult<User>;

    /// Full-record write by primary key
    async fn update(&self, user: &User) -> AppResult<User>;
}

/// SeaORM-backed user store over the pooled connection.
#[derive(Clone)]
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        queries::find_by_id(&self.db, id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        queries::find_by_email(&self.db, email).await
    }

    async fn insert(&self, user: &User) -> AppResult<User> {
        queries::insert(&self.db, user).await
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        queries::update(&self.db, user).await
    }
}

/// Connection-generic queries shared by the pooled store and the
/// transaction-scoped repository.
pub(crate) mod queries {
    use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait};

    use super::super::entities::user::{self, Entity as UserEntity};
    use super::*;
    use crate::errors::AppError;

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<Option<User>> {
        let model = UserEntity::find_by_id(id).one(conn).await?;
        Ok(model.map(User::from))
    }

    pub async fn find_by_email<C: ConnectionTrait>(
        conn: &C,
        email: &str,
    ) -> AppResult<Option<User>> {
        let model = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(conn)
            .await?;
        Ok(model.map(User::from))
    }

    pub async fn insert<C: ConnectionTrait>(conn: &C, user: &User) -> AppResult<User> {
        user::ActiveModel::from(user)
            .insert(conn)
            .await
            .map_err(|e| match e.sql_err() {
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::conflict("email already registered")
                }
                _ => AppError::from(e),
            })?;
        Ok(user.clone())
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, user: &User) -> AppResult<User> {
        user::ActiveModel::from(user)
            .update(conn)
            .await
            .map_err(|e| match e {
                sea_orm::DbErr::RecordNotUpdated => AppError::NotFound("user"),
                _ => AppError::from(e),
            })?;
        Ok(user.clone())
    }
}
