//! Rental-request data access.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::domain::Request;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Request repository trait for dependency injection.
///
/// Lookups that feed user-facing listings exclude soft-deleted records;
/// `find_by_id` does not, so settled history stays reachable.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Find a request by primary key, soft-deleted included
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Request>>;

    /// Non-deleted requests for a room, in insertion order
    async fn find_by_room(&self, room_id: Uuid) -> AppResult<Vec<Request>>;

    /// Non-deleted requests for a room filed by the given requester
    async fn find_by_room_and_requester(
        &self,
        room_id: Uuid,
        requester_email: &str,
    ) -> AppResult<Vec<Request>>;

    /// Insert a new request
    async fn insert(&self, request: &Request) -> AppResult<Request>;

    /// Full-record upsert by primary key
    async fn upsert(&self, request: &Request) -> AppResult<Request>;
}

/// SeaORM-backed request store over the pooled connection.
#[derive(Clone)]
pub struct RequestStore {
    db: DatabaseConnection,
}

impl RequestStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestRepository for RequestStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Request>> {
        queries::find_by_id(&self.db, id).await
    }

    async fn find_by_room(&self, room_id: Uuid) -> AppResult<Vec<Request>> {
        queries::find_by_room(&self.db, room_id).await
    }

    async fn find_by_room_and_requester(
        &self,
        room_id: Uuid,
        requester_email: &str,
    ) -> AppResult<Vec<Request>> {
        queries::find_by_room_and_requester(&self.db, room_id, requester_email).await
    }

    async fn insert(&self, request: &Request) -> AppResult<Request> {
        queries::insert(&self.db, request).await
    }

    async fn upsert(&self, request: &Request) -> AppResult<Request> {
        queries::upsert(&self.db, request).await
    }
}

/// Connection-generic queries shared by the pooled store and the
/// transaction-scoped repository.
pub(crate) mod queries {
    use sea_orm::sea_query::OnConflict;
    use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait};

    use super::super::entities::request::{self, Entity as RequestEntity};
    use super::*;
    use crate::errors::AppError;

    pub async fn find_by_id<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> AppResult<Option<Request>> {
        let model = RequestEntity::find_by_id(id).one(conn).await?;
        Ok(model.map(Request::from))
    }

    pub async fn find_by_room<C: ConnectionTrait>(
        conn: &C,
        room_id: Uuid,
    ) -> AppResult<Vec<Request>> {
        let models = RequestEntity::find()
            .filter(request::Column::RoomId.eq(room_id))
            .filter(request::Column::DeletedAt.is_null())
            .order_by_asc(request::Column::CreatedAt)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(Request::from).collect())
    }

    pub async fn find_by_room_and_requester<C: ConnectionTrait>(
        conn: &C,
        room_id: Uuid,
        requester_email: &str,
    ) -> AppResult<Vec<Request>> {
        let models = RequestEntity::find()
            .filter(request::Column::RoomId.eq(room_id))
            .filter(request::Column::RequesterEmail.eq(requester_email))
            .filter(request::Column::DeletedAt.is_null())
            .order_by_asc(request::Column::CreatedAt)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(Request::from).collect())
    }

    pub async fn insert<C: ConnectionTrait>(conn: &C, request: &Request) -> AppResult<Request> {
        request::ActiveModel::from(request)
            .insert(conn)
            .await
            .map_err(|e| match e.sql_err() {
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::conflict("request already exists")
                }
                _ => AppError::from(e),
            })?;
        Ok(request.clone())
    }

    /// Insert-or-replace by primary key: every non-key column takes the
    /// value of the given record. No partial-merge semantics.
    pub async fn upsert<C: ConnectionTrait>(conn: &C, request: &Request) -> AppResult<Request> {
        RequestEntity::insert(request::ActiveModel::from(request))
            .on_conflict(
                OnConflict::column(request::Column::Id)
                    .update_columns([
                        request::Column::RoomId,
                        request::Column::RequesterEmail,
                        request::Column::State,
                        request::Column::CreatedAt,
                        request::Column::DeletedAt,
                    ])
                    .to_owned(),
            )
            .exec(conn)
            .await?;
        Ok(request.clone())
    }
}
