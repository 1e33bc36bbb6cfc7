//! Room data access.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::domain::Room;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Room repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find a room by primary key, soft-deleted included
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>>;

    /// Non-deleted rooms listed by the given owner, in insertion order
    async fn find_by_owner(&self, owner_email: &str) -> AppResult<Vec<Room>>;

    /// Every room, soft-deleted included
    async fn find_all(&self) -> AppResult<Vec<Room>>;

    /// Insert a new room
    async fn insert(&self, room: &Room) -> AppResult<Room>;

    /// Full-record write by primary key
    async fn update(&self, room: &Room) -> AppResult<Room>;

    /// Rewrite the image reference of every room; returns the row count
    async fn set_all_images(&self, image: &str) -> AppResult<u64>;
}

/// SeaORM-backed room store over the pooled connection.
#[derive(Clone)]
pub struct RoomStore {
    db: DatabaseConnection,
}

impl RoomStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoomRepository for RoomStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
        queries::find_by_id(&self.db, id).await
    }

    async fn find_by_owner(&self, owner_email: &str) -> AppResult<Vec<Room>> {
        queries::find_by_owner(&self.db, owner_email).await
    }

    async fn find_all(&self) -> AppResult<Vec<Room>> {
        queries::find_all(&self.db).await
    }

    async fn insert(&self, room: &Room) -> AppResult<Room> {
        queries::insert(&self.db, room).await
    }

    async fn update(&self, room: &Room) -> AppResult<Room> {
        queries::update(&self.db, room).await
    }

    async fn set_all_images(&self, image: &str) -> AppResult<u64> {
        queries::set_all_images(&self.db, image).await
    }
}

/// Connection-generic queries shared by the pooled store and the
/// transaction-scoped repository.
pub(crate) mod queries {
    use sea_orm::sea_query::Expr;
    use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait};

    use super::super::entities::room::{self, Entity as RoomEntity};
    use super::*;
    use crate::errors::AppError;

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<Option<Room>> {
        let model = RoomEntity::find_by_id(id).one(conn).await?;
        Ok(model.map(Room::from))
    }

    pub async fn find_by_owner<C: ConnectionTrait>(
        conn: &C,
        owner_email: &str,
    ) -> AppResult<Vec<Room>> {
        let models = RoomEntity::find()
            .filter(room::Column::OwnerEmail.eq(owner_email))
            .filter(room::Column::DeletedAt.is_null())
            .order_by_asc(room::Column::CreatedAt)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(Room::from).collect())
    }

    pub async fn find_all<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<Room>> {
        let models = RoomEntity::find()
            .order_by_asc(room::Column::CreatedAt)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(Room::from).collect())
    }

    pub async fn insert<C: ConnectionTrait>(conn: &C, room: &Room) -> AppResult<Room> {
        room::ActiveModel::from(room)
            .insert(conn)
            .await
            .map_err(|e| match e.sql_err() {
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::conflict("room already exists")
                }
                _ => AppError::from(e),
            })?;
        Ok(room.clone())
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, room: &Room) -> AppResult<Room> {
        room::ActiveModel::from(room)
            .update(conn)
            .await
            .map_err(|e| match e {
                sea_orm::DbErr::RecordNotUpdated => AppError::NotFound("room"),
                _ => AppError::from(e),
            })?;
        Ok(room.clone())
    }

    /// Bulk backfill: one set-based statement instead of a scan-and-put loop.
    pub async fn set_all_images<C: ConnectionTrait>(conn: &C, image: &str) -> AppResult<u64> {
        let result = RoomEntity::update_many()
            .col_expr(room::Column::Image, Expr::value(image))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}
